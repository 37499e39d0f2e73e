//! Runs in its own process: the theme singleton can be set only once.

use mimic_paint::Color;
use mimic_theme::*;

fn same_object(a: &dyn NativeTheme, b: &dyn NativeTheme) -> bool {
    std::ptr::eq(
        a as *const dyn NativeTheme as *const (),
        b as *const dyn NativeTheme as *const (),
    )
}

#[test]
fn installed_theme_is_the_instance() {
    assert!(try_instance().is_none());

    install(ThemeStyle::Classic.build()).unwrap();
    let first = instance();
    let second = instance();
    assert!(same_object(first, second));
    assert_eq!(first.name(), ClassicTheme::NAME);
    assert!(try_instance().is_some_and(|theme| same_object(theme, first)));

    assert!(matches!(
        install(ThemeStyle::Fluent.build()),
        Err(ThemeError::AlreadyInitialized)
    ));
    assert!(matches!(
        init_from_config(&ThemeConfig::new(ThemeStyle::Adwaita)),
        Err(ThemeError::AlreadyInitialized)
    ));
    assert_eq!(instance().name(), ClassicTheme::NAME);

    // Colors set through one reference show up through every other
    first.set_scrollbar_colors(Color::RED, Color::GREEN, Color::BLUE);
    assert_eq!(second.scrollbar_colors().thumb_active, Color::GREEN);
}
