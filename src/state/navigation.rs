//! Static sidebar navigation data

use super::View;

/// A top-level navigation entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub title: &'static str,
    pub icon: &'static str,
    pub badge: Option<&'static str>,
    /// View this entry opens, if it is routable
    pub target: Option<View>,
}

/// A page inside a workspace
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkspacePage {
    pub name: &'static str,
    pub icon: &'static str,
    pub target: Option<View>,
}

/// A named group of pages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Workspace {
    pub name: &'static str,
    pub icon: &'static str,
    pub pages: &'static [WorkspacePage],
}

pub const NAV_MAIN: &[NavItem] = &[
    NavItem {
        title: "Search",
        icon: "⌕",
        badge: None,
        target: None,
    },
    NavItem {
        title: "Ask AI",
        icon: "✦",
        badge: None,
        target: None,
    },
    NavItem {
        title: "Home",
        icon: "⌂",
        badge: None,
        target: Some(View::Home),
    },
    NavItem {
        title: "Inbox",
        icon: "✉",
        badge: Some("10"),
        target: None,
    },
];

pub const WORKSPACES: &[Workspace] = &[Workspace {
    name: "Demos",
    icon: "▤",
    pages: &[
        WorkspacePage {
            name: "Voice Agent",
            icon: "☎",
            target: Some(View::VoiceAgent),
        },
        WorkspacePage {
            name: "Flow Control",
            icon: "⑂",
            target: None,
        },
    ],
}];

/// One selectable sidebar row, flattened across the nav list and workspaces
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidebarEntry {
    pub label: String,
    pub target: Option<View>,
    /// Workspace name when this entry starts a new workspace group
    pub group_header: Option<&'static str>,
}

impl SidebarEntry {
    pub fn is_enabled(&self) -> bool {
        self.target.is_some()
    }
}

/// All sidebar entries in display order
pub fn sidebar_entries() -> Vec<SidebarEntry> {
    let mut entries: Vec<SidebarEntry> = NAV_MAIN
        .iter()
        .map(|item| SidebarEntry {
            label: match item.badge {
                Some(badge) => format!("{} {} ({badge})", item.icon, item.title),
                None => format!("{} {}", item.icon, item.title),
            },
            target: item.target,
            group_header: None,
        })
        .collect();

    for workspace in WORKSPACES {
        for (idx, page) in workspace.pages.iter().enumerate() {
            entries.push(SidebarEntry {
                label: format!("{} {}", page.icon, page.name),
                target: page.target,
                group_header: (idx == 0).then_some(workspace.name),
            });
        }
    }

    entries
}

/// Index of the first enabled entry that opens `view`
pub fn entry_index_for(view: &View) -> Option<usize> {
    sidebar_entries()
        .iter()
        .position(|e| e.target.as_ref() == Some(view))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entries_in_display_order() {
        let labels: Vec<String> = sidebar_entries().into_iter().map(|e| e.label).collect();
        assert_eq!(
            labels,
            vec![
                "⌕ Search",
                "✦ Ask AI",
                "⌂ Home",
                "✉ Inbox (10)",
                "☎ Voice Agent",
                "⑂ Flow Control",
            ]
        );
    }

    #[test]
    fn test_only_routable_entries_enabled() {
        let enabled: Vec<Option<View>> = sidebar_entries()
            .into_iter()
            .filter(SidebarEntry::is_enabled)
            .map(|e| e.target)
            .collect();
        assert_eq!(enabled, vec![Some(View::Home), Some(View::VoiceAgent)]);
    }

    #[test]
    fn test_workspace_header_on_first_page_only() {
        let entries = sidebar_entries();
        assert_eq!(entries[4].group_header, Some("Demos"));
        assert_eq!(entries[5].group_header, None);
    }

    #[test]
    fn test_entry_index_for_views() {
        assert_eq!(entry_index_for(&View::Home), Some(2));
        assert_eq!(entry_index_for(&View::VoiceAgent), Some(4));
    }
}
