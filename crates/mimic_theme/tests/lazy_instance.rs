//! Runs in its own process: the first `instance()` call picks the theme.

use mimic_theme::*;
use std::thread;

#[test]
fn first_use_selects_a_theme_once() {
    assert!(try_instance().is_none());

    let names: Vec<String> = (0..4)
        .map(|_| thread::spawn(|| instance().name().to_string()))
        .collect::<Vec<_>>()
        .into_iter()
        .map(|handle| handle.join().unwrap())
        .collect();
    assert!(names.windows(2).all(|pair| pair[0] == pair[1]));

    assert!(matches!(
        install(ThemeStyle::Classic.build()),
        Err(ThemeError::AlreadyInitialized)
    ));
}
