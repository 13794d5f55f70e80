use fractty::grammar::{Catalog, Fractal, GrammarError};

/// Oracle: one rewrite pass, written independently of the engine.
fn rewrite_once_oracle(tape: &str, rules: &rustc_hash::FxHashMap<char, String>) -> String {
    let mut out = String::new();
    for sym in tape.chars() {
        match rules.get(&sym) {
            Some(replacement) => out.push_str(replacement),
            None => out.push(sym),
        }
    }
    out
}

#[test]
fn test_level_zero_is_base_for_all_fractals() {
    let bases = [
        (Fractal::BoxOutline, "F+F+F+F"),
        (Fractal::DragonCurve, "YF"),
        (Fractal::ExteriorSnowflake, "F+F+F+F+F+F"),
        (Fractal::HilbertICurve, "L"),
        (Fractal::HilbertIICurve, "X"),
        (Fractal::KochAntisnowflake, "F++F++F++F"),
        (Fractal::KochCurve, "F"),
        (Fractal::KochIsland, "F+F+F+F"),
        (Fractal::KochSnowflake, "F++F++F"),
        (Fractal::PeanoCurve, "F"),
        (Fractal::SierpinskiArrowhead, "YF"),
        (Fractal::SierpinskiCurve, "F+F+F+F"),
        (Fractal::SierpinskiTriangle, "FXF++FF++FF"),
    ];

    for (fractal, base) in bases {
        let mut sys = fractal.grammar();
        assert_eq!(sys.expand(0).unwrap(), base, "{}", fractal.name());
    }
}

#[test]
fn test_each_level_is_one_rewrite_of_the_previous() {
    for fractal in Fractal::ALL {
        let mut sys = fractal.grammar();
        for depth in 1..=3usize {
            let prev = sys.expand(depth - 1).unwrap().to_string();
            let expected = rewrite_once_oracle(&prev, sys.rules());
            assert_eq!(
                sys.expand(depth).unwrap(),
                expected,
                "{} at level {}",
                fractal.name(),
                depth
            );
        }
    }
}

#[test]
fn test_cached_levels_are_not_recomputed() {
    let mut sys = Fractal::KochCurve.grammar();
    let first = sys.expand(4).unwrap().to_string();
    assert_eq!(sys.rewrite_passes(), 4);
    assert_eq!(sys.cached_levels(), 5);

    // Second request at a cached depth: identical string, zero new work.
    let second = sys.expand(4).unwrap().to_string();
    assert_eq!(first, second);
    assert_eq!(sys.rewrite_passes(), 4);
    assert_eq!(sys.cached_levels(), 5);

    // A shallower request also does no work.
    sys.expand(2).unwrap();
    assert_eq!(sys.rewrite_passes(), 4);
}

#[test]
fn test_expansion_length_grows_monotonically() {
    for fractal in Fractal::ALL {
        let mut sys = fractal.grammar();
        let mut prev_len = sys.expand(0).unwrap().len();
        for depth in 1..=4usize {
            let len = sys.expand(depth).unwrap().len();
            assert!(
                len >= prev_len,
                "{} shrank at level {}: {} -> {}",
                fractal.name(),
                depth,
                prev_len,
                len
            );
            prev_len = len;
        }
    }
}

#[test]
fn test_known_literal_expansions() {
    let mut koch = Fractal::KochCurve.grammar();
    assert_eq!(koch.expand(1).unwrap(), "F+F-F-F+F");

    let mut dragon = Fractal::DragonCurve.grammar();
    assert_eq!(dragon.expand(1).unwrap(), "-FX-YF");
    assert_eq!(dragon.expand(2).unwrap(), "-FX+YF+--FX-YF");

    let mut triangle = Fractal::SierpinskiTriangle.grammar();
    assert_eq!(
        triangle.expand(1).unwrap(),
        "FF++FXF--FXF--FXF++FF++FFFF++FFFF"
    );
}

#[test]
fn test_turn_symbols_are_never_rewritten() {
    // '+' and '-' have no rules in any catalog grammar; they must appear in
    // every level exactly as produced, with no special-casing.
    let mut sys = Fractal::KochSnowflake.grammar();
    let level2 = sys.expand(2).unwrap();
    assert!(level2.contains("++"));
    assert!(level2.chars().all(|c| matches!(c, 'F' | '+' | '-')));
}

#[test]
fn test_expansion_limit_fails_loudly_and_keeps_cache() {
    let mut sys = Fractal::PeanoCurve.grammar().with_max_level_len(2_000);
    // Peano grows 9x per level from a single F: levels 0..=3 fit, 4 does not.
    sys.expand(3).unwrap();
    let cached = sys.cached_levels();

    match sys.expand(4) {
        Err(GrammarError::ExpansionTooLarge { required, limit }) => {
            assert!(required > limit);
            assert_eq!(limit, 2_000);
        }
        other => panic!("expected ExpansionTooLarge, got {:?}", other.map(|s| s.len())),
    }

    // No partial entry was stored and earlier levels still resolve.
    assert_eq!(sys.cached_levels(), cached);
    assert_eq!(sys.expand(0).unwrap(), "F");
}

#[test]
fn test_catalog_contains_all_thirteen_fractals() {
    assert_eq!(Fractal::ALL.len(), 13);

    let mut names: Vec<&str> = Fractal::ALL.iter().map(|f| f.name()).collect();
    names.sort();
    names.dedup();
    assert_eq!(names.len(), 13, "display names collide");

    let mut catalog = Catalog::new();
    for fractal in Fractal::ALL {
        let base = catalog.expand(fractal, 0).unwrap();
        assert!(!base.is_empty(), "{} has an empty base", fractal.name());
    }
}

#[test]
fn test_fractal_cycling_wraps_both_ways() {
    let mut f = Fractal::BoxOutline;
    for _ in 0..Fractal::ALL.len() {
        f = f.next();
    }
    assert_eq!(f, Fractal::BoxOutline);

    for _ in 0..Fractal::ALL.len() {
        f = f.prev();
    }
    assert_eq!(f, Fractal::BoxOutline);

    assert_eq!(Fractal::BoxOutline.prev(), Fractal::SierpinskiTriangle);
    assert_eq!(Fractal::SierpinskiTriangle.next(), Fractal::BoxOutline);
}

#[test]
fn test_fractal_name_lookup() {
    assert_eq!(
        Fractal::from_arg("koch-snowflake"),
        Some(Fractal::KochSnowflake)
    );
    assert_eq!(
        Fractal::from_arg("Hilbert I Curve"),
        Some(Fractal::HilbertICurve)
    );
    assert_eq!(
        Fractal::from_arg("SIERPINSKI_ARROWHEAD"),
        Some(Fractal::SierpinskiArrowhead)
    );
    assert_eq!(Fractal::from_arg("mandelbrot"), None);
}

#[test]
fn test_unknown_fractal_error_message() {
    let err = GrammarError::UnknownFractal {
        name: "mandelbrot".to_string(),
    };
    assert_eq!(err.to_string(), "Unknown fractal 'mandelbrot'");
}
