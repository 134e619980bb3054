//! Static bonus kind → attribute table.

use crate::bonus::BonusKind;
use crate::types::EffectTarget;

/// Where one bonus kind lands on an actor.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BonusTarget {
    pub kind: BonusKind,
    /// Attribute path on the actor.
    pub key: &'static str,
    pub target: EffectTarget,
    /// Value emitted regardless of the bonus's declared value.
    pub literal: Option<f64>,
}

const fn entry(kind: BonusKind, key: &'static str, target: EffectTarget) -> BonusTarget {
    BonusTarget {
        kind,
        key,
        target,
        literal: None,
    }
}

// cheap_struct / cheap_stress are one-time repair cost reductions: the source
// data treats them as flags and always writes 1.
const fn flag(kind: BonusKind, key: &'static str, target: EffectTarget) -> BonusTarget {
    BonusTarget {
        kind,
        key,
        target,
        literal: Some(1.0),
    }
}

use BonusKind as K;
use EffectTarget::{Mech, OnlyDeployable, OnlyDrone, Pilot};

pub static BONUS_TABLE: &[BonusTarget] = &[
    entry(K::Range, "system.range_bonus", Mech),
    entry(K::Damage, "system.damage_bonus", Mech),
    entry(K::Hp, "system.hp.max", Mech),
    entry(K::Armor, "system.armor", Mech),
    entry(K::Structure, "system.structure.max", Mech),
    entry(K::Stress, "system.stress.max", Mech),
    entry(K::Heatcap, "system.heat.max", Mech),
    entry(K::Repcap, "system.repairs.max", Mech),
    entry(K::Speed, "system.speed", Mech),
    entry(K::Evasion, "system.evasion", Mech),
    entry(K::Edef, "system.edef", Mech),
    entry(K::Sensor, "system.sensor_range", Mech),
    entry(K::Attack, "system.bonuses.flat.range_attack", Mech),
    entry(K::TechAttack, "system.bonuses.flat.tech_attack", Mech),
    entry(K::Grapple, "system.bonuses.flat.grapple", Mech),
    entry(K::Ram, "system.bonuses.flat.ram", Mech),
    entry(K::Save, "system.save", Mech),
    entry(K::Sp, "system.loadout.sp.max", Mech),
    entry(K::Size, "system.size", Mech),
    entry(K::AiCap, "system.ai.max", Mech),
    flag(K::CheapStruct, "system.structure_repair_cost", Mech),
    flag(K::CheapStress, "system.stress_repair_cost", Mech),
    entry(K::PilotHp, "system.hp.max", Pilot),
    entry(K::PilotArmor, "system.armor", Pilot),
    entry(K::PilotEvasion, "system.evasion", Pilot),
    entry(K::PilotEdef, "system.edef", Pilot),
    entry(K::PilotSpeed, "system.speed", Pilot),
    entry(K::DeployableHp, "system.hp.max", OnlyDeployable),
    entry(K::DeployableSize, "system.size", OnlyDeployable),
    entry(K::DeployableArmor, "system.armor", OnlyDeployable),
    entry(K::DeployableEvasion, "system.evasion", OnlyDeployable),
    entry(K::DeployableEdef, "system.edef", OnlyDeployable),
    entry(K::DeployableSensorRange, "system.sensor_range", OnlyDeployable),
    entry(K::DeployableTechAttack, "system.tech_attack_bonus", OnlyDeployable),
    entry(K::DeployableSave, "system.save", OnlyDeployable),
    entry(K::DeployableSpeed, "system.speed", OnlyDeployable),
    entry(K::DroneHp, "system.hp.max", OnlyDrone),
    entry(K::DroneSize, "system.size", OnlyDrone),
    entry(K::DroneArmor, "system.armor", OnlyDrone),
    entry(K::DroneEvasion, "system.evasion", OnlyDrone),
    entry(K::DroneEdef, "system.edef", OnlyDrone),
    entry(K::DroneSensorRange, "system.sensor_range", OnlyDrone),
    entry(K::DroneTechAttack, "system.tech_attack_bonus", OnlyDrone),
    entry(K::DroneSave, "system.save", OnlyDrone),
    entry(K::DroneSpeed, "system.speed", OnlyDrone),
];

/// Table entry for a kind.
pub fn lookup(kind: BonusKind) -> Option<&'static BonusTarget> {
    BONUS_TABLE.iter().find(|entry| entry.kind == kind)
}
