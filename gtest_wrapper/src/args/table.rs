use std::collections::HashMap;

use once_cell::sync::Lazy;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rewrite {
    /// Emit under the given gtest-parallel flag name.
    Forward(&'static str),
    /// Emit as `--output_dir` and remember the directory for artifact derivation.
    OutputDir,
    /// Consumed; only enables the derived `--test_artifacts_dir`.
    StoreTestArtifacts,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KnownOption {
    pub long: &'static str,
    pub short: Option<&'static str>,
    pub takes_value: bool,
    pub rewrite: Rewrite,
}

const fn forward(long: &'static str, short: Option<&'static str>) -> KnownOption {
    KnownOption {
        long,
        short,
        takes_value: true,
        rewrite: Rewrite::Forward(long),
    }
}

const fn forward_flag(long: &'static str) -> KnownOption {
    KnownOption {
        long,
        short: None,
        takes_value: false,
        rewrite: Rewrite::Forward(long),
    }
}

pub const KNOWN_OPTIONS: &[KnownOption] = &[
    forward("--timeout", None),
    KnownOption {
        long: "--output_dir",
        short: Some("-d"),
        takes_value: true,
        rewrite: Rewrite::OutputDir,
    },
    KnownOption {
        long: "--store-test-artifacts",
        short: None,
        takes_value: false,
        rewrite: Rewrite::StoreTestArtifacts,
    },
    KnownOption {
        long: "--isolated-script-test-output",
        short: None,
        takes_value: true,
        rewrite: Rewrite::Forward("--dump_json_test_results"),
    },
    forward("--dump_json_test_results", None),
    forward("--repeat", Some("-r")),
    forward("--workers", Some("-w")),
    forward("--retry_failed", None),
    forward("--gtest_filter", None),
    forward("--gtest_color", None),
    forward_flag("--gtest_also_run_disabled_tests"),
];

static BY_NAME: Lazy<HashMap<&'static str, &'static KnownOption>> = Lazy::new(|| {
    KNOWN_OPTIONS
        .iter()
        .flat_map(|opt| {
            std::iter::once((opt.long, opt))
                .chain(opt.short.map(|short| (short, opt)))
        })
        .collect()
});

impl KnownOption {
    /// Exact lookup by long name (`--timeout`) or short alias (`-d`).
    pub fn lookup(name: &str) -> Option<&'static KnownOption> {
        BY_NAME.get(name).copied()
    }

    /// Name under which the option lands in the rewritten output. Options
    /// sharing an output name share one slot.
    pub fn output_flag(&self) -> &'static str {
        match self.rewrite {
            Rewrite::Forward(flag) => flag,
            Rewrite::OutputDir => "--output_dir",
            Rewrite::StoreTestArtifacts => self.long,
        }
    }
}
