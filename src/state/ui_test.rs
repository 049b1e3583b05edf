use super::*;

#[test]
fn ui_state_default_theme_is_light() {
    assert_eq!(UiState::default().theme, Theme::Light);
}

#[test]
fn toggle_label_tracks_theme() {
    let light = UiState { theme: Theme::Light };
    let dark = UiState { theme: Theme::Dark };
    assert_ne!(light.toggle_label(), dark.toggle_label());
}
