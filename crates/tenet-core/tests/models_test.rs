use proptest::prelude::*;

use tenet_core::models::*;

fn signal(id: &str, category: &str, embedding: Vec<f32>, order: u64) -> Signal {
    Signal {
        id: id.to_string(),
        text: format!("text of {id}"),
        source: SignalSource::new(format!("{category}/{id}.md"), category, 0),
        dimension: Some(Dimension::Honesty),
        signal_type: SignalType::Value,
        embedding,
        confidence: Confidence::new(0.9),
        creation_order: order,
    }
}

#[test]
fn dimension_parses_case_insensitively() {
    assert_eq!("Honesty".parse::<Dimension>().unwrap(), Dimension::Honesty);
    assert_eq!(
        " boundaries-ethics ".parse::<Dimension>().unwrap(),
        Dimension::BoundariesEthics
    );
    assert!("kindness".parse::<Dimension>().is_err());
}

#[test]
fn dimension_serde_matches_label() {
    for d in Dimension::ALL {
        let json = serde_json::to_string(&d).unwrap();
        assert_eq!(json, format!("\"{}\"", d.label()));
    }
}

#[test]
fn greenfield_state_parses_and_defaults() {
    assert_eq!(GreenfieldState::default(), GreenfieldState::Bootstrap);
    assert_eq!("LEARN".parse::<GreenfieldState>().unwrap(), GreenfieldState::Learn);
    assert_eq!("enforce".parse::<GreenfieldState>().unwrap(), GreenfieldState::Enforce);
    assert!("strict".parse::<GreenfieldState>().is_err());
    assert!(GreenfieldState::Enforce.rejects());
    assert!(!GreenfieldState::Learn.rejects());
}

#[test]
fn confidence_clamps() {
    assert_eq!(Confidence::new(1.7).value(), 1.0);
    assert_eq!(Confidence::new(-0.2).value(), 0.0);
    assert_eq!(Confidence::new(f64::NAN).value(), 0.0);
    assert!(Confidence::new(0.5).meets(0.5));
}

#[test]
fn signal_id_is_content_derived() {
    let source = SignalSource::new("memory/diary.md", "memory", 3);
    let a = Signal::derive_id(&source, "I value candor");
    let b = Signal::derive_id(&source, "I value candor");
    let c = Signal::derive_id(&SignalSource::new("memory/diary.md", "memory", 4), "I value candor");
    assert_eq!(a, b);
    assert_ne!(a, c);
    assert!(a.starts_with("sig-"));
}

#[test]
fn validation_result_into_result() {
    let ok = ValidationResult {
        valid: true,
        policy: GreenfieldState::Bootstrap,
        reason: None,
        would_reject: Some("no-axioms-generated".into()),
        notes: vec![],
    };
    assert!(ok.into_result().is_ok());

    let rejected = ValidationResult {
        valid: false,
        policy: GreenfieldState::Enforce,
        reason: Some("no-axioms-generated".into()),
        would_reject: None,
        notes: vec![],
    };
    let err = rejected.into_result().unwrap_err();
    assert!(err.to_string().contains("no-axioms-generated"));
}

#[test]
fn check_outcome_reports_first_failure() {
    let mut outcome = CheckOutcome::passed();
    assert!(outcome.is_passed());
    outcome.fail(RejectReason::NoPrinciplesGenerated, "3 signals, 0 principles");
    outcome.fail(RejectReason::NoAxiomsGenerated, "0 axioms");
    assert!(!outcome.is_passed());
    assert_eq!(
        outcome.primary().unwrap().reason.code(),
        "no-principles-generated"
    );
}

#[test]
fn store_serde_roundtrip_preserves_content() {
    let a = signal("a", "diary", vec![1.0, 0.0], 0);
    let b = signal("b", "notes", vec![0.9, 0.1], 1);
    let mut p = Principle::seed(&a, Dimension::Honesty);
    p.absorb(&b);

    let mut store = PrincipleStore::new();
    store.signals.insert(a.id.clone(), a);
    store.signals.insert(b.id.clone(), b);
    store.principles.push(p);
    store.check_invariants().unwrap();

    let json = serde_json::to_string(&store).unwrap();
    let back: PrincipleStore = serde_json::from_str(&json).unwrap();
    assert_eq!(back, store);
}

#[test]
fn promoted_status_without_axiom_is_invariant_violation() {
    let a = signal("a", "diary", vec![1.0, 0.0], 0);
    let mut p = Principle::seed(&a, Dimension::Honesty);
    p.promotion = PromotionStatus::Promoted(AxiomRef {
        axiom_id: "ax-missing".into(),
    });
    let mut store = PrincipleStore::new();
    store.signals.insert(a.id.clone(), a);
    store.principles.push(p);

    let err = store.check_invariants().unwrap_err();
    assert!(err.to_string().contains("ax-missing"));
}

proptest! {
    #[test]
    fn absorb_keeps_count_invariant(
        embeddings in prop::collection::vec(prop::collection::vec(-1.0f32..1.0, 4), 1..20),
        categories in prop::collection::vec(0usize..4, 20),
    ) {
        let signals: Vec<Signal> = embeddings
            .into_iter()
            .enumerate()
            .map(|(i, e)| signal(&format!("s{i}"), &format!("cat{}", categories[i]), e, i as u64))
            .collect();

        let mut p = Principle::seed(&signals[0], Dimension::Honesty);
        for s in &signals[1..] {
            p.absorb(s);
        }

        let distinct: std::collections::BTreeSet<&str> =
            signals.iter().map(|s| s.category()).collect();
        prop_assert_eq!(p.reinforcement_count, signals.len());
        prop_assert_eq!(p.cross_category_strength, distinct.len());
        prop_assert_eq!(p.centroid.len(), 4);
    }

    #[test]
    fn promotion_merge_never_demotes(b in any::<bool>(), n in any::<bool>()) {
        let status = |promoted: bool, id: &str| if promoted {
            PromotionStatus::Promoted(AxiomRef { axiom_id: id.to_string() })
        } else {
            PromotionStatus::NotPromoted
        };
        let merged = PromotionStatus::merge(&status(b, "ax-b"), &status(n, "ax-n"));
        prop_assert_eq!(merged.status.is_promoted(), b || n);
    }
}
