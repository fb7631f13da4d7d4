//! Spell cast integration tests.
//!
//! These tests verify the full cast flow: in-order bursting at the caster,
//! deferral of projectile phrases, the launcher hand-off, message passing
//! between phrases, and impact resolution through `ProjectileQueue`.

use std::sync::{Arc, Mutex};

use arcane_spells::area::{AreaResolver, StaticWorld};
use arcane_spells::core::{
    BlockLocation, DirectHit, Direction, EntityId, Location, SpellCaster, SpellConfig, SpellRng,
};
use arcane_spells::effects::{EffectFn, SpellEffect};
use arcane_spells::error::SpellError;
use arcane_spells::modifiers::{
    Aoe, AoeShape, AoeSize, SpellEffectModifier, SpellStrength, SpellTarget,
};
use arcane_spells::spell::{
    BurstContext, CastContext, MessagePayload, Phrase, ProjectileLauncher, ProjectileQueue, Spell,
    SpellCast, SpellMessage,
};

/// Launcher that keeps every hand-off for inspection.
#[derive(Default)]
struct Capture {
    launches: Vec<(SpellCast, Vec<Phrase>)>,
}

impl ProjectileLauncher for Capture {
    fn launch_spell_phrases(&mut self, cast: SpellCast, phrases: Vec<Phrase>) {
        self.launches.push((cast, phrases));
    }
}

type Calls = Arc<Mutex<Vec<String>>>;

fn recording(name: &'static str, calls: &Calls) -> SpellEffect {
    let calls = Arc::clone(calls);
    EffectFn::shared(name, move |_, _| calls.lock().unwrap().push(name.to_string()))
}

fn projectile() -> SpellEffectModifier {
    SpellEffectModifier::Target(SpellTarget::Projectile)
}

fn entity_caster(id: u32) -> SpellCaster {
    SpellCaster::entity(EntityId(id), Location::new(1.0, 2.0, 3.0), Direction::FORWARD)
}

// =============================================================================
// Synchronous Pass
// =============================================================================

/// Test the basic flow: one phrase bursts on the caster, one is launched.
#[test]
fn test_cast_bursts_and_defers() {
    let calls = Calls::default();
    let world = StaticWorld::new();
    let mut launcher = Capture::default();

    let near = Phrase::single(
        recording("x", &calls),
        [SpellEffectModifier::Aoe(Aoe::TargetOnly)],
    );
    let far = Phrase::single(recording("y", &calls), [projectile()]);
    let spell = Spell::new([near, far.clone()]);

    let summary = {
        let mut ctx = CastContext::new(&world, &mut launcher).with_rng(SpellRng::new(1));
        spell.cast(entity_caster(5), &mut ctx)
    };

    assert_eq!(*calls.lock().unwrap(), vec!["x".to_string()]);
    assert_eq!(summary.phrases_burst(), 1);
    assert_eq!(summary.phrases_deferred, 1);

    let args = &summary.invocations[0];
    assert_eq!(args.affected_entities.len(), 1);
    assert!(args.affected_entities.contains(&EntityId(5)));
    assert_eq!(args.burst_location, Location::new(1.0, 2.0, 3.0));
    assert_eq!(args.burst_direction, Direction::FORWARD);
    assert_eq!(args.target, SpellTarget::Caster);

    assert_eq!(launcher.launches.len(), 1);
    let (cast, phrases) = &launcher.launches[0];
    assert_eq!(phrases.len(), 1);
    assert!(phrases[0].same_phrase(&far));
    assert_eq!(cast.invocation_count(), 1);
    assert_eq!(cast.projectile_phrases().len(), 1);
    assert_eq!(cast.location(), Location::new(1.0, 2.0, 3.0));
}

/// Test that phrases burst in declaration order.
#[test]
fn test_phrases_burst_in_order() {
    let calls = Calls::default();
    let world = StaticWorld::new();
    let mut launcher = Capture::default();

    let spell = Spell::new(
        ["a", "b", "c"].map(|name| Phrase::single(recording(name, &calls), [])),
    );

    let summary = {
        let mut ctx = CastContext::new(&world, &mut launcher);
        spell.cast(entity_caster(1), &mut ctx)
    };

    assert_eq!(*calls.lock().unwrap(), vec!["a", "b", "c"]);
    let names: Vec<_> = summary.invocations.iter().map(|a| a.effect_name().to_string()).collect();
    assert_eq!(names, vec!["a", "b", "c"]);
    assert!(launcher.launches.is_empty());
}

/// Test that a spell with only projectile phrases performs nothing immediately.
#[test]
fn test_all_projectile_phrases() {
    let calls = Calls::default();
    let world = StaticWorld::new();
    let mut launcher = Capture::default();

    let spell = Spell::new([
        Phrase::single(recording("a", &calls), [projectile()]),
        Phrase::single(recording("b", &calls), [projectile()]),
    ]);

    let summary = {
        let mut ctx = CastContext::new(&world, &mut launcher);
        spell.cast(entity_caster(1), &mut ctx)
    };

    assert!(calls.lock().unwrap().is_empty());
    assert_eq!(summary.phrases_burst(), 0);
    assert_eq!(summary.phrases_deferred, 2);
    assert_eq!(launcher.launches.len(), 1);
    assert_eq!(launcher.launches[0].1.len(), 2);
}

/// Test that only phrases the cast deferred are launched, even when an
/// effect marks another phrase on the cast.
#[test]
fn test_launch_ignores_phrases_marked_by_effects() {
    let calls = Calls::default();
    let world = StaticWorld::new();
    let mut launcher = Capture::default();

    let stray = Phrase::single(recording("stray", &calls), [projectile()]);
    let marker = {
        let stray = stray.clone();
        EffectFn::shared("marker", move |_, cast| cast.mark_as_projectile_phrase(stray.clone()))
    };
    let far = Phrase::single(recording("far", &calls), [projectile()]);
    let spell = Spell::new([Phrase::single(marker, []), far.clone()]);

    let summary = {
        let mut ctx = CastContext::new(&world, &mut launcher);
        spell.cast(entity_caster(1), &mut ctx)
    };

    assert_eq!(summary.phrases_burst(), 1);
    assert_eq!(summary.phrases_deferred, 1);
    assert_eq!(launcher.launches.len(), 1);
    let (cast, phrases) = &launcher.launches[0];
    assert_eq!(phrases.len(), 1);
    assert!(phrases[0].same_phrase(&far));
    // The stray mark stays on the cast but is never launched.
    assert_eq!(cast.projectile_phrases().len(), 2);
    assert!(calls.lock().unwrap().is_empty());
}

/// Test that phrases without effects neither burst nor launch.
#[test]
fn test_effectless_phrase_is_skipped() {
    let world = StaticWorld::new();
    let mut launcher = Capture::default();

    let spell = Spell::new([Phrase::new([], [])]);
    let summary = {
        let mut ctx = CastContext::new(&world, &mut launcher);
        spell.cast(entity_caster(1), &mut ctx)
    };

    assert_eq!(summary.phrases_burst(), 0);
    assert_eq!(summary.phrases_deferred, 0);
    assert!(launcher.launches.is_empty());
}

// =============================================================================
// Caster Kinds
// =============================================================================

/// Test that a block caster is its own direct hit.
#[test]
fn test_block_caster_hits_itself() {
    let calls = Calls::default();
    let world = StaticWorld::new();
    let mut launcher = Capture::default();

    let block = BlockLocation::new(3, 4, 5);
    let caster = SpellCaster::block(block, Direction::UP);
    let spell = Spell::new([Phrase::single(recording("glow", &calls), [])]);

    let summary = {
        let mut ctx = CastContext::new(&world, &mut launcher);
        spell.cast(caster, &mut ctx)
    };

    let args = &summary.invocations[0];
    assert_eq!(args.block_hit(), Some(block));
    assert!(args.entity_hit().is_none());
    assert_eq!(args.affected_blocks.len(), 1);
    assert!(args.affected_blocks.contains(&block));
    assert!(args.affected_entities.is_empty());
    assert_eq!(args.burst_location, Location::new(3.5, 4.5, 5.5));
}

/// Test that a caster that is neither entity nor block still bursts.
#[test]
fn test_other_caster_bursts_without_hit() {
    let calls = Calls::default();
    let world = StaticWorld::new().with_entity(EntityId(2), Location::new(0.0, 0.0, 1.0));
    let mut launcher = Capture::default();

    let caster = SpellCaster::other(Location::default(), Direction::FORWARD);
    let spell = Spell::new([
        Phrase::single(recording("quiet", &calls), []),
        Phrase::single(
            recording("loud", &calls),
            [SpellEffectModifier::Aoe(Aoe::TargetAndAroundTarget)],
        ),
    ]);

    let summary = {
        let mut ctx = CastContext::new(&world, &mut launcher);
        spell.cast(caster, &mut ctx)
    };

    assert_eq!(*calls.lock().unwrap(), vec!["quiet", "loud"]);
    assert!(summary.invocations[0].direct_hit.is_none());
    assert!(summary.invocations[0].affected_entities.is_empty());
    assert!(summary.invocations[1].affected_entities.contains(&EntityId(2)));
}

// =============================================================================
// Message Passing
// =============================================================================

/// Test that a later phrase reads a message and the log left by an earlier one.
#[test]
fn test_messages_flow_between_phrases() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let world = StaticWorld::new();
    let mut launcher = Capture::default();

    let mark = EffectFn::shared("mark", |args, cast| {
        let target = args.entity_hit().expect("entity caster");
        assert!(cast
            .pass_message(SpellMessage::new("Marked", MessagePayload::Entity(target)))
            .is_none());
    });
    let seen_in_effect = Arc::clone(&seen);
    let read = EffectFn::shared("read", move |_, cast| {
        let log = cast.spell_args_cast();
        let payload = cast.get_message("marked").map(|m| m.payload().clone());
        seen_in_effect.lock().unwrap().push((log.len(), log[0].effect_name().to_string(), payload));
    });

    let spell = Spell::new([Phrase::single(mark, []), Phrase::single(read, [])]);
    {
        let mut ctx = CastContext::new(&world, &mut launcher);
        spell.cast(entity_caster(8), &mut ctx);
    }

    let seen = seen.lock().unwrap();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].0, 2);
    assert_eq!(seen[0].1, "mark");
    assert_eq!(seen[0].2, Some(MessagePayload::Entity(EntityId(8))));
}

/// Test that a second non-forced message with the same name loses.
#[test]
fn test_message_collision_between_phrases() {
    let outcomes = Arc::new(Mutex::new(Vec::new()));
    let world = StaticWorld::new();
    let mut launcher = Capture::default();

    let out = Arc::clone(&outcomes);
    let write = EffectFn::shared("write", move |args, cast| {
        let value = args.strength.multiplier();
        let previous = cast.pass_message(SpellMessage::new("power", MessagePayload::Number(value)));
        out.lock().unwrap().push(previous.map(SpellMessage::into_payload));
    });

    let spell = Spell::new([
        Phrase::single(Arc::clone(&write), [SpellEffectModifier::Strength(SpellStrength::Weak)]),
        Phrase::single(write, [SpellEffectModifier::Strength(SpellStrength::Strong)]),
    ]);
    {
        let mut ctx = CastContext::new(&world, &mut launcher);
        spell.cast(entity_caster(1), &mut ctx);
    }

    let outcomes = outcomes.lock().unwrap();
    assert_eq!(*outcomes, vec![None, Some(MessagePayload::Number(0.5))]);
}

// =============================================================================
// Projectile Impact
// =============================================================================

/// Test a full cast whose projectile phrase bursts on impact against the same cast.
#[test]
fn test_projectile_queue_impact() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let world = StaticWorld::new()
        .with_entity(EntityId(7), Location::new(0.0, 0.0, 10.0))
        .with_entity(EntityId(8), Location::new(0.0, 0.0, 11.0));
    let mut queue = ProjectileQueue::new();

    let charge = EffectFn::shared("charge", |_, cast| {
        cast.pass_message(SpellMessage::flag("charged"));
    });
    let seen_in_effect = Arc::clone(&seen);
    let bolt = EffectFn::shared("bolt", move |args, cast| {
        let charged = cast.get_message("charged").is_some();
        seen_in_effect.lock().unwrap().push((charged, args.target, args.affected_entities.len()));
    });

    let spell = Spell::new([
        Phrase::single(charge, []),
        Phrase::single(
            bolt,
            [
                projectile(),
                SpellEffectModifier::Aoe(Aoe::TargetAndAroundTarget),
                SpellEffectModifier::Size(AoeSize::Small),
                SpellEffectModifier::Shape(AoeShape::Sphere),
            ],
        ),
    ]);

    let summary = {
        let mut ctx = CastContext::new(&world, &mut queue).with_rng(SpellRng::new(11));
        spell.cast(entity_caster(1), &mut ctx)
    };
    assert_eq!(summary.phrases_burst(), 1);
    assert_eq!(queue.in_flight_count(), 1);
    assert!(seen.lock().unwrap().is_empty());

    let area = AreaResolver::default();
    let mut rng = SpellRng::new(11);
    let mut ctx = BurstContext::new(&world, &area, &mut rng);
    let id = queue.last_launched().unwrap();
    let hit = Some(DirectHit::Entity(EntityId(7)));
    let cast = queue
        .impact(id, hit, Location::new(0.0, 0.0, 10.0), Direction::FORWARD, &mut ctx)
        .unwrap();

    assert_eq!(*seen.lock().unwrap(), vec![(true, SpellTarget::Projectile, 2)]);
    assert_eq!(cast.invocation_count(), 2);
    assert!(queue.is_empty());
}

// =============================================================================
// Configuration and Reproducibility
// =============================================================================

fn varied_spell() -> Spell {
    let noop = |name: &'static str| EffectFn::shared(name, |_, _| {});
    let modifiers: Vec<SpellEffectModifier> = Aoe::ALL
        .into_iter()
        .map(SpellEffectModifier::from)
        .chain(AoeSize::ALL.into_iter().map(SpellEffectModifier::from))
        .chain(AoeShape::ALL.into_iter().map(SpellEffectModifier::from))
        .chain(SpellStrength::ALL.into_iter().map(SpellEffectModifier::from))
        .collect();
    Spell::new((0..6).map(|_| Phrase::new([noop("a"), noop("b"), noop("c")], modifiers.clone())))
}

/// Test that a configured seed makes every choice reproducible.
#[test]
fn test_seeded_casts_repeat() {
    let world = StaticWorld::new();
    let config = SpellConfig::default().with_seed(2024);
    let spell = varied_spell();

    let picks = |spell: &Spell| {
        let mut launcher = Capture::default();
        let mut ctx = CastContext::from_config(&config, &world, &mut launcher).unwrap();
        spell
            .cast(entity_caster(1), &mut ctx)
            .invocations
            .iter()
            .map(|a| (a.effect_name().to_string(), a.aoe, a.aoe_size, a.aoe_shape, a.strength))
            .collect::<Vec<_>>()
    };

    let first = picks(&spell);
    assert_eq!(first.len(), 6);
    assert_eq!(first, picks(&spell));
}

/// Test that invalid configuration is rejected before casting.
#[test]
fn test_invalid_config_rejected() {
    let world = StaticWorld::new();
    let mut launcher = Capture::default();
    let config = SpellConfig::default().with_cone_half_angle(0.0);

    let result = CastContext::from_config(&config, &world, &mut launcher);
    assert!(matches!(
        result,
        Err(SpellError::InvalidConfig { field: "cone_half_angle_degrees", .. })
    ));
}

/// Test loading configuration from JSON with defaults for missing fields.
#[test]
fn test_config_from_json() {
    let config = SpellConfig::from_json(r#"{ "seed": 9, "geometry": { "line_half_width": 1.5 } }"#).unwrap();
    assert_eq!(config.seed, Some(9));
    assert_eq!(config.geometry.line_half_width, 1.5);
    assert_eq!(config.geometry.cone_half_angle_degrees, 45.0);

    assert!(matches!(
        SpellConfig::from_json("{ not json"),
        Err(SpellError::ConfigParse(_))
    ));
}
