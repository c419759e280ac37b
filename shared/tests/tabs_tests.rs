//! Tab controller tests

use proptest::prelude::*;
use shared::TabSet;

const PANELS: [&str; 3] = ["recommendTab", "historyTab", "aboutTab"];

fn tab_set() -> TabSet {
    let ids: Vec<String> = PANELS.iter().map(|s| s.to_string()).collect();
    TabSet::new(ids.clone(), ids)
}

#[test]
fn clicking_selects_matching_panel() {
    let mut tabs = tab_set();

    for (index, panel) in PANELS.iter().enumerate() {
        assert!(tabs.activate(index));
        assert_eq!(tabs.active_panel(), Some(*panel));
        let active: Vec<usize> = tabs
            .selector_states()
            .iter()
            .enumerate()
            .filter(|(_, s)| s.active)
            .map(|(i, _)| i)
            .collect();
        assert_eq!(active, [index]);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// After every click exactly one panel is visible and one selector active
    #[test]
    fn prop_exactly_one_visible(clicks in prop::collection::vec(0usize..3, 1..40)) {
        let mut tabs = tab_set();

        for click in clicks {
            tabs.activate(click);

            let panels = tabs.panel_states();
            let selectors = tabs.selector_states();
            prop_assert_eq!(panels.iter().filter(|p| p.visible).count(), 1);
            prop_assert_eq!(selectors.iter().filter(|s| s.active).count(), 1);

            let visible = panels.iter().find(|p| p.visible).unwrap();
            prop_assert_eq!(&visible.id, &selectors[click].target);
            prop_assert!(selectors[click].active);
        }
    }

    /// Repeating the last click changes nothing
    #[test]
    fn prop_repeat_click_is_noop(clicks in prop::collection::vec(0usize..3, 1..20)) {
        let mut tabs = tab_set();
        for click in &clicks {
            tabs.activate(*click);
        }
        let settled = tabs.clone();
        tabs.activate(*clicks.last().unwrap());
        prop_assert_eq!(tabs, settled);
    }
}
