use super::*;

fn sample_json() -> &'static str {
    r#"{
        "seed": 7,
        "rotation": { "interval_ms": 10000, "policy": "sequential" },
        "effects": [
            { "kind": "rain", "interval_ms": 100, "max_droplets": 5, "plane": "-z" },
            { "kind": "send_voxels", "interval_ms": 50, "axis": "z" },
            { "kind": "explorer", "interval_ms": 100 },
            { "kind": "fully_on" },
            { "kind": "glowing" },
            { "kind": "glyphs", "interval_ms": 100, "plane": "+y" }
        ]
    }"#
}

#[test]
fn parses_and_builds_the_configured_pool() {
    let show = Show::from_json(sample_json()).unwrap();
    show.validate().unwrap();

    assert_eq!(show.seed, Some(7));
    assert_eq!(show.rotation.policy, Policy::Sequential);
    assert_eq!(show.effects.len(), 6);

    let sched = show.build_scheduler();
    assert_eq!(sched.len(), 6);
    assert_eq!(sched.policy(), Policy::Sequential);
}

#[test]
fn glowing_defaults_to_a_zero_interval() {
    let show = Show::from_json(sample_json()).unwrap();
    assert!(matches!(
        show.effects[4],
        EffectConfig::Glowing { interval_ms: 0 }
    ));
}

#[test]
fn unknown_kinds_are_config_errors() {
    let err = Show::from_json(
        r#"{
            "rotation": { "interval_ms": 1000, "policy": "fixed" },
            "effects": [ { "kind": "lava_lamp" } ]
        }"#,
    )
    .unwrap_err();
    assert!(matches!(err, LuxelError::Config(_)), "{err}");
}

#[test]
fn empty_effect_lists_fail_validation() {
    let show = Show::from_json(
        r#"{
            "rotation": { "interval_ms": 1000, "policy": "random" },
            "effects": []
        }"#,
    )
    .unwrap();
    assert!(matches!(show.validate(), Err(LuxelError::Validation(_))));
}

#[test]
fn zero_droplet_rain_fails_validation() {
    let show = Show::from_json(
        r#"{
            "rotation": { "interval_ms": 1000, "policy": "fixed" },
            "effects": [
                { "kind": "rain", "interval_ms": 100, "max_droplets": 0, "plane": "-z" }
            ]
        }"#,
    )
    .unwrap();
    let err = show.validate().unwrap_err();
    assert!(err.to_string().contains("max_droplets"));
}

#[test]
fn shows_roundtrip_through_json() {
    let show = Show::from_json(sample_json()).unwrap();
    let json = serde_json::to_string(&show).unwrap();
    let back = Show::from_json(&json).unwrap();
    assert_eq!(back.effects.len(), show.effects.len());
    assert_eq!(back.rotation.interval_ms, show.rotation.interval_ms);
}
