//! Recognized bonus identifiers.

/// Every bonus id the converter knows how to turn into a modification.
///
/// The string form is the rule-book lid (`"hp"`, `"tech_attack"`,
/// `"drone_sensor_range"`). Ids that fail to parse are carried as plain
/// strings on [`Bonus`](super::Bonus) and dropped during conversion.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
    strum::EnumCount,
)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
#[strum(serialize_all = "snake_case")]
pub enum BonusKind {
    // ========================================================================
    // Mech
    // ========================================================================
    Range,
    Damage,
    Hp,
    Armor,
    Structure,
    Stress,
    Heatcap,
    Repcap,
    Speed,
    Evasion,
    Edef,
    Sensor,
    Attack,
    TechAttack,
    Grapple,
    Ram,
    Save,
    Sp,
    Size,
    AiCap,
    CheapStruct,
    CheapStress,

    // ========================================================================
    // Pilot
    // ========================================================================
    PilotHp,
    PilotArmor,
    PilotEvasion,
    PilotEdef,
    PilotSpeed,

    // ========================================================================
    // Deployables
    // ========================================================================
    DeployableHp,
    DeployableSize,
    DeployableArmor,
    DeployableEvasion,
    DeployableEdef,
    DeployableSensorRange,
    DeployableTechAttack,
    DeployableSave,
    DeployableSpeed,

    // ========================================================================
    // Drones
    // ========================================================================
    DroneHp,
    DroneSize,
    DroneArmor,
    DroneEvasion,
    DroneEdef,
    DroneSensorRange,
    DroneTechAttack,
    DroneSave,
    DroneSpeed,
}

impl BonusKind {
    /// Kinds that also feed weapon profiles directly during weapon preparation.
    pub const fn targets_weapons(&self) -> bool {
        matches!(self, Self::Damage | Self::Range)
    }
}
