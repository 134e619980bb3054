use lancer_core::{
    ActorContext, ActorType, AttributeMap, Bonus, BonusKind, BonusList, ChangeValue, ChangeWatch,
    CoreSystem, Damage, DamageType, EffectCompiler, EffectError, EffectMode, EngineConfig,
    EngineError, Entity, EntityKind, ErrorSeverity, Frame, FrameStats, FrameTrait, MechWeapon,
    NpcClass, NpcTierStats, Pilot, Priority, Range, RangeType, Status, StatusType, Talent,
    TalentRank, WeaponProfile, WeaponSize, WeaponType, prepare_weapon, resolve,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("lancer_core=trace")
        .with_test_writer()
        .try_init();
}

fn everest() -> Entity {
    let frame = Frame {
        stats: FrameStats {
            armor: 0,
            edef: 8,
            evasion: 8,
            save: 10,
            sensor_range: 10,
            size: 1.0,
            speed: 4,
            tech_attack: 0,
            hp: 10,
            structure: 4,
            stress: 4,
            heatcap: 6,
            repcap: 5,
            sp: 6,
        },
        core_system: CoreSystem {
            name: "Hyperspec Fuel Injector".into(),
            passive_bonuses: vec![Bonus::of(BonusKind::Hp, 5)],
            active_bonuses: Vec::new(),
        },
        traits: vec![FrameTrait::new(
            "Initiative",
            vec![Bonus::of(BonusKind::Armor, 1)],
        )],
    };
    Entity::new("everest", "Everest", EntityKind::Frame(frame))
        .with_icon("systems/lancer/assets/icons/frame.svg")
        .equipped(true)
}

fn pilot() -> Entity {
    Entity::new(
        "pilot",
        "Pilot",
        EntityKind::Pilot(Pilot {
            hull: 3,
            agi: 1,
            sys: 2,
            eng: 1,
            grit: 2,
        }),
    )
}

/// Mech loadout scenario: frame, pilot, talent and a system compiled and
/// resolved onto a bare mech.
#[test]
fn test_mech_loadout_scenario() {
    init_tracing();
    let compiler = EffectCompiler::default();
    let actor = ActorContext::default();

    // ================================================================
    // PHASE 1: Frame
    // ================================================================
    let frame = compiler
        .compile(&everest(), &actor)
        .expect("frame should compile");
    let frame_effect = frame.effect().expect("frame should produce an effect");

    let adds: Vec<_> = frame_effect
        .changes
        .iter()
        .filter(|c| c.mode == EffectMode::Add)
        .map(|c| (c.key.as_str(), c.value.clone(), c.priority))
        .collect();
    assert_eq!(
        adds,
        vec![
            ("system.hp.max", ChangeValue::Number(5.0), Priority::BONUS),
            ("system.armor", ChangeValue::Number(1.0), Priority::BONUS),
        ]
    );
    let overrides = frame_effect
        .changes
        .iter()
        .filter(|c| c.mode == EffectMode::Override && c.priority == Priority::FRAME)
        .count();
    assert_eq!(overrides, 14);

    // ================================================================
    // PHASE 2: Everything else on the mech
    // ================================================================
    let talent = Entity::new(
        "talent",
        "Walking Armory",
        EntityKind::Talent(Talent {
            ranks: vec![
                TalentRank {
                    name: "Rank 1".into(),
                    bonuses: vec![Bonus::of(BonusKind::Sp, 1)],
                },
                TalentRank {
                    name: "Rank 2".into(),
                    bonuses: vec![Bonus::of(BonusKind::Speed, 1)],
                },
            ],
            curr_rank: 0,
        }),
    );
    let system = Entity::new(
        "system",
        "Reinforced Frame",
        EntityKind::MechSystem(BonusList::new(vec![
            Bonus::of(BonusKind::Structure, 1),
            Bonus::of(BonusKind::Speed, 3).replacing(),
        ])),
    )
    .equipped(true);

    let all = compiler
        .compile_all([&everest(), &pilot(), &talent, &system], &actor)
        .expect("loadout should compile");
    assert_eq!(all.effects.len(), 4);
    assert!(all.warnings.is_empty());

    // ================================================================
    // PHASE 3: Resolve onto the mech
    // ================================================================
    let mech = resolve(&AttributeMap::new(), &all.effects, ActorType::Mech);
    let number = |key: &str| mech.get(key).and_then(ChangeValue::as_number);

    // frame 10 + core 5 + pilot 2*3+2
    assert_eq!(number("system.hp.max"), Some(23.0));
    assert_eq!(number("system.armor"), Some(1.0));
    assert_eq!(number("system.structure.max"), Some(5.0));
    // frame 6 + talent 1 + pilot 2/2+2
    assert_eq!(number("system.loadout.sp.max"), Some(10.0));
    // replacement at 50 beats frame 4 + pilot 0
    assert_eq!(number("system.speed"), Some(3.0));
    assert_eq!(number("system.hull"), Some(3.0));
    assert_eq!(number("system.repairs.max"), Some(6.0));

    // Pilot-targeted changes never land on a pilot actor from mech items.
    let on_pilot = resolve(&AttributeMap::new(), &all.effects, ActorType::Pilot);
    assert!(on_pilot.is_empty());
}

#[test]
fn test_recompilation_is_idempotent() {
    let compiler = EffectCompiler::default();
    let actor = ActorContext::default().with_core_active();

    let mut watch = ChangeWatch::default();
    assert!(watch.set(compiler.compile(&everest(), &actor).unwrap().effects));
    watch.take();

    for _ in 0..3 {
        let again = compiler.compile(&everest(), &actor).unwrap().effects;
        assert!(!watch.set(again));
    }
    assert!(!watch.is_dirty());

    assert!(watch.set(compiler.compile(&everest().destroyed(), &actor).unwrap().effects));
    assert!(watch.value().is_empty());
}

#[test]
fn test_unknown_bonus_is_reported_once() {
    init_tracing();
    let gear = Entity::new(
        "gear",
        "Custom Paint Job",
        EntityKind::MechSystem(BonusList::new(vec![
            Bonus::new("skill_point", 1),
            Bonus::of(BonusKind::Evasion, 1),
        ])),
    )
    .equipped(true);

    let compiled = EffectCompiler::default()
        .compile(&gear, &ActorContext::default())
        .expect("unknown bonuses never fail compilation");

    assert_eq!(compiled.warnings.len(), 1);
    let warning = &compiled.warnings[0];
    assert_eq!(warning.origin, "gear");
    assert_eq!(warning.severity(), ErrorSeverity::Recoverable);
    assert_eq!(warning.error_code(), "BONUS_UNSUPPORTED");
    assert_eq!(
        warning.to_string(),
        "bonus of type skill_point not yet supported (Custom Paint Job - skill_point)"
    );

    let effect = compiled.effect().expect("known bonus still applies");
    assert_eq!(effect.changes.len(), 1);
    assert_eq!(effect.changes[0].key, "system.evasion");
}

#[test]
fn test_cheap_repairs_emit_literal_one() {
    let core_bonus = Entity::new(
        "cb",
        "Reinforced Frame Cheap",
        EntityKind::CoreBonus(BonusList::new(vec![
            Bonus::of(BonusKind::CheapStruct, 7),
            Bonus::of(BonusKind::CheapStress, "anything"),
        ])),
    );
    let effect = EffectCompiler::default()
        .compile(&core_bonus, &ActorContext::default())
        .unwrap()
        .into_effect()
        .unwrap();
    assert!(
        effect
            .changes
            .iter()
            .all(|c| c.value == ChangeValue::Number(1.0))
    );
}

#[test]
fn test_status_and_npc_effects() {
    let compiler = EffectCompiler::new(EngineConfig::default().with_default_npc_tier(2));

    let status = Entity::new(
        "st",
        "Shredded",
        EntityKind::Status(Status {
            lid: "shredded".into(),
            status_type: StatusType::Condition,
        }),
    );
    let npc = Entity::new(
        "class",
        "Berserker",
        EntityKind::NpcClass(NpcClass {
            base_stats: vec![
                NpcTierStats {
                    hp: 12,
                    ..NpcTierStats::default()
                },
                NpcTierStats {
                    hp: 14,
                    ..NpcTierStats::default()
                },
            ],
        }),
    );

    let all = compiler
        .compile_all([&npc, &status], &ActorContext::default())
        .unwrap();
    let resolved = resolve(&AttributeMap::new(), &all.effects, ActorType::Npc);
    assert_eq!(resolved["system.hp.max"], ChangeValue::Number(14.0));
    assert_eq!(resolved["system.statuses.shredded"], ChangeValue::Flag(true));

    let err = compiler
        .compile(&npc, &ActorContext::default().with_npc_tier(3))
        .unwrap_err();
    assert_eq!(err.severity(), ErrorSeverity::Validation);
    assert_eq!(
        err.context().and_then(|c| c.entity.as_deref()),
        Some("class")
    );
}

#[test]
fn test_weapon_preparation_and_errors() {
    let mut weapon = MechWeapon::new(
        WeaponSize::Main,
        vec![
            WeaponProfile::new(WeaponType::Melee)
                .with_damage(Damage::new(DamageType::Kinetic, "1d6"))
                .with_range(Range::new(RangeType::Threat, 1)),
        ],
    );

    let mech_bonuses = [
        Bonus::of(BonusKind::Range, 1),
        Bonus::of(BonusKind::Damage, 2).with_weapon_types([(WeaponType::Melee, false)]),
        Bonus::of(BonusKind::Damage, 1).with_weapon_sizes([(WeaponSize::Heavy, false)]),
    ];
    let prepared = prepare_weapon(&weapon, &mech_bonuses, 0).expect("weapon has a profile");
    assert_eq!(prepared.bonus_range, vec![Range::new(RangeType::Threat, 1)]);
    assert_eq!(
        prepared.bonus_damage,
        vec![Damage::new(DamageType::Kinetic, "1")]
    );

    weapon.selected_profile = 5;
    let entity = Entity::new("blade", "Chain Axe", EntityKind::MechWeapon(weapon)).equipped(true);
    let err = EffectCompiler::default()
        .compile(&entity, &ActorContext::default())
        .unwrap_err();
    assert!(matches!(
        err,
        EffectError::MissingActiveProfile {
            selected: 5,
            available: 1,
            ..
        }
    ));
    assert!(err.severity().is_internal());
}

#[test]
fn test_text_bonus_values_sum_numerically() {
    let frame = Entity::new(
        "frame",
        "Sagarmatha",
        EntityKind::Frame(Frame {
            stats: FrameStats {
                hp: 10,
                ..FrameStats::default()
            },
            ..Frame::default()
        }),
    )
    .equipped(true);
    let system = Entity::new(
        "system",
        "Armor Lock Plating",
        EntityKind::MechSystem(BonusList::new(vec![Bonus::new("hp", "2")])),
    )
    .equipped(true);

    let all = EffectCompiler::default()
        .compile_all([&frame, &system], &ActorContext::default())
        .expect("loadout should compile");
    let mech = resolve(&AttributeMap::new(), &all.effects, ActorType::Mech);

    assert_eq!(mech["system.hp.max"], ChangeValue::Number(12.0));
}
