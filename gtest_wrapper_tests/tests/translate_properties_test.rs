use gtest_wrapper::args::{SHARD_HEADER, translate};
use similar_asserts::assert_eq;

/// Input fragment plus the slot/value it writes, if it is a wrapper option.
struct Fragment {
    tokens: &'static [&'static str],
    slot: Option<(&'static str, &'static str)>,
}

const FRAGMENTS: [Fragment; 9] = [
    Fragment {
        tokens: &["--timeout=1"],
        slot: Some(("--timeout", "1")),
    },
    Fragment {
        tokens: &["--timeout", "2"],
        slot: Some(("--timeout", "2")),
    },
    Fragment {
        tokens: &["-d", "/a"],
        slot: Some(("--output_dir", "/a")),
    },
    Fragment {
        tokens: &["--output_dir=/b"],
        slot: Some(("--output_dir", "/b")),
    },
    Fragment {
        tokens: &["--repeat=3"],
        slot: Some(("--repeat", "3")),
    },
    Fragment {
        tokens: &["-r", "4"],
        slot: Some(("--repeat", "4")),
    },
    Fragment {
        tokens: &["exec"],
        slot: None,
    },
    Fragment {
        tokens: &["--inner"],
        slot: None,
    },
    Fragment {
        tokens: &["pos"],
        slot: None,
    },
];

fn ordered_triples() -> Vec<[usize; 3]> {
    let n = FRAGMENTS.len();
    (0..n)
        .flat_map(|a| (0..n).flat_map(move |b| (0..n).map(move |c| [a, b, c])))
        .filter(|[a, b, c]| a != b && b != c && a != c)
        .collect()
}

fn expected_slots(picks: &[usize]) -> Vec<String> {
    let mut slots: Vec<(&str, &str)> = vec![];
    for (flag, value) in picks.iter().filter_map(|&i| FRAGMENTS[i].slot) {
        match slots.iter_mut().find(|(existing, _)| *existing == flag) {
            Some(slot) => slot.1 = value,
            None => slots.push((flag, value)),
        }
    }
    slots
        .into_iter()
        .map(|(flag, value)| format!("{flag}={value}"))
        .collect()
}

#[test]
fn every_combination_keeps_header_and_slot_invariant() {
    for picks in ordered_triples() {
        let argv = picks
            .iter()
            .flat_map(|&i| FRAGMENTS[i].tokens.iter().map(|t| t.to_string()))
            .collect::<Vec<_>>();
        let result = translate(&argv).unwrap();

        assert!(
            result.wrapper_args.starts_with(&SHARD_HEADER.map(String::from)),
            "{argv:?}"
        );
        assert_eq!(result.rewritten_options, expected_slots(&picks), "{argv:?}");
        assert_eq!(
            &result.wrapper_args[2..2 + result.rewritten_options.len()],
            result.rewritten_options.as_slice(),
            "{argv:?}"
        );
    }
}

#[test]
fn every_combination_is_stable_under_retranslation() {
    for picks in ordered_triples() {
        let argv = picks
            .iter()
            .flat_map(|&i| FRAGMENTS[i].tokens.iter().map(|t| t.to_string()))
            .collect::<Vec<_>>();
        let first = translate(&argv).unwrap();
        let second = translate(&first.wrapper_args[2..]).unwrap();
        assert_eq!(second.rewritten_options, first.rewritten_options, "{argv:?}");
    }
}

#[test]
fn executable_is_first_bare_positional() {
    let argv = ["--x", "first", "second", "--timeout=1", "third"]
        .map(String::from)
        .to_vec();
    let result = translate(&argv).unwrap();
    assert_eq!(result.executable.as_deref(), Some("first"));
    assert_eq!(
        result.passthrough_args,
        ["--x", "second", "third"].map(String::from).to_vec()
    );
}
