//! Innate stat blocks - rule-book stats an entity contributes independent of
//! its bonuses.
//!
//! Precedence follows the rule book: frame and class statlines override first
//! ([`Priority::FRAME`]), item bonuses add on top, the pilot's HASE/GRIT
//! contributions come after ([`Priority::PILOT`]), and statuses sit above
//! everything generated here.

use crate::effect::{Modification, Priority};
use crate::entity::{Frame, NpcTierStats, Pilot};
use crate::types::EffectTarget;

/// Base statline of a frame, overriding the mech's attributes.
pub fn frame_innate(frame: &Frame) -> Vec<Modification> {
    let s = &frame.stats;
    let set = |key: &str, value: f64| {
        Modification::set(format!("system.{key}"), Priority::FRAME, value)
            .with_target(EffectTarget::Mech)
    };

    vec![
        set("armor", s.armor.into()),
        set("edef", s.edef.into()),
        set("evasion", s.evasion.into()),
        set("save", s.save.into()),
        set("sensor_range", s.sensor_range.into()),
        set("size", s.size),
        set("speed", s.speed.into()),
        set("tech_attack", s.tech_attack.into()),
        set("hp.max", s.hp.into()),
        set("structure.max", s.structure.into()),
        set("stress.max", s.stress.into()),
        set("heat.max", s.heatcap.into()),
        set("repairs.max", s.repcap.into()),
        set("loadout.sp.max", s.sp.into()),
    ]
}

/// Tier statline of an NPC class, overriding the NPC's attributes.
pub fn npc_class_innate(stats: &NpcTierStats) -> Vec<Modification> {
    let set = |key: &str, value: f64| {
        Modification::set(format!("system.{key}"), Priority::FRAME, value)
    };

    vec![
        set("activations", stats.activations.into()),
        set("armor", stats.armor.into()),
        set("evasion", stats.evasion.into()),
        set("edef", stats.edef.into()),
        set("speed", stats.speed.into()),
        set("sensor_range", stats.sensor_range.into()),
        set("save", stats.save.into()),
        set("hull", stats.hull.into()),
        set("agi", stats.agi.into()),
        set("sys", stats.sys.into()),
        set("eng", stats.eng.into()),
        set("size", stats.size),
        set("hp.max", stats.hp.into()),
        set("structure.max", stats.structure.into()),
        set("stress.max", stats.stress.into()),
        set("heat.max", stats.heatcap.into()),
    ]
}

/// What a pilot adds to the mech they pilot.
///
/// HASE and GRIT are copied onto the mech verbatim; the derived formulas add
/// on top of the frame statline.
pub fn pilot_innate(pilot: &Pilot) -> Vec<Modification> {
    let Pilot {
        hull,
        agi,
        sys,
        eng,
        grit,
    } = *pilot;
    let set = |key: &str, value: i32| {
        Modification::set(format!("system.{key}"), Priority::PILOT, value)
            .with_target(EffectTarget::Mech)
    };
    let add = |key: &str, value: i32| {
        Modification::add(format!("system.{key}"), Priority::PILOT, value)
            .with_target(EffectTarget::Mech)
    };

    vec![
        // HULL
        set("hull", hull),
        add("hp.max", 2 * hull + grit),
        add("repairs.max", hull.div_euclid(2)),
        // AGILITY
        set("agi", agi),
        add("evasion", agi),
        add("speed", agi.div_euclid(2)),
        // SYSTEMS
        set("sys", sys),
        add("edef", sys),
        add("tech_attack", sys),
        add("save", grit),
        add("loadout.sp.max", sys.div_euclid(2) + grit),
        // ENGINEERING
        set("eng", eng),
        add("heat.max", eng),
        add("loadout.limited_bonus", eng.div_euclid(2)),
        set("grit", grit),
    ]
}
