use gtest_wrapper::args::KNOWN_OPTIONS;
use gtest_wrapper::help::help_text;

#[test]
fn help_lists_every_known_option() {
    let help = help_text();
    for option in KNOWN_OPTIONS.iter() {
        assert!(help.contains(option.long), "missing {}", option.long);
        if let Some(short) = option.short {
            assert!(help.contains(&format!("{short}, {}", option.long)));
        }
    }
}

#[test]
fn help_names_environment_overrides() {
    let help = help_text();
    for var in [
        "GTEST_WRAPPER_CONFIG",
        "GTEST_WRAPPER_FORMAT",
        "GTEST_WRAPPER_VERBOSE",
        "GTEST_WRAPPER_DIAGNOSTICS_DIR",
    ] {
        assert!(help.contains(var), "missing {var}");
    }
}
