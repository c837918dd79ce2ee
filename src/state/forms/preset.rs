//! Demo presets used to prefill the call form

/// A named set of form values offered for quick form-filling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DemoOption {
    pub name: &'static str,
    pub phone_number: &'static str,
    pub company_name: &'static str,
}

/// Presets, in selector order
pub const DEMO_OPTIONS: &[DemoOption] = &[
    DemoOption {
        name: "Mike",
        phone_number: "+351912580952",
        company_name: "Drifter",
    },
    DemoOption {
        name: "Jordi",
        phone_number: "+31641532184",
        company_name: "E.Z.P.Z Recruitment",
    },
];

/// Look up a preset by selector index
pub fn demo_option(index: usize) -> Option<&'static DemoOption> {
    DEMO_OPTIONS.get(index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_in_order() {
        assert_eq!(DEMO_OPTIONS.len(), 2);
        assert_eq!(DEMO_OPTIONS[0].name, "Mike");
        assert_eq!(DEMO_OPTIONS[1].name, "Jordi");
    }

    #[test]
    fn test_out_of_range_is_none() {
        assert!(demo_option(2).is_none());
        assert!(demo_option(usize::MAX).is_none());
    }
}
