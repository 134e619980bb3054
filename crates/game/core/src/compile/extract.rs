//! Bonus Extractor - the authoritative bonus list of an entity.

use crate::bonus::Bonus;
use crate::entity::{ActorContext, Entity, EntityKind};
use crate::error::EffectError;

/// Collect the bonuses an entity currently grants.
///
/// Pure read of the snapshot. Entities whose contribution is an innate stat
/// block (pilots, NPC classes, statuses) have no ordinary bonus list.
pub fn extract_bonuses<'a>(
    entity: &'a Entity,
    actor: &ActorContext,
) -> Result<Vec<&'a Bonus>, EffectError> {
    let bonuses = match &entity.kind {
        EntityKind::Frame(frame) => {
            let active: &[Bonus] = if actor.core_active {
                &frame.core_system.active_bonuses
            } else {
                &[]
            };
            frame
                .core_system
                .passive_bonuses
                .iter()
                .chain(active)
                .chain(
                    frame
                        .traits
                        .iter()
                        .filter(|t| t.unlocked)
                        .flat_map(|t| &t.bonuses),
                )
                .collect()
        }
        EntityKind::Talent(talent) => talent
            .unlocked_ranks()
            .iter()
            .flat_map(|rank| &rank.bonuses)
            .collect(),
        EntityKind::MechWeapon(weapon) => weapon
            .active_profile()
            .map_err(|e| e.for_entity(entity))?
            .bonuses
            .iter()
            .collect(),
        EntityKind::WeaponMod(weapon_mod) => weapon_mod.bonuses.iter().collect(),
        EntityKind::CoreBonus(list)
        | EntityKind::MechSystem(list)
        | EntityKind::PilotArmor(list)
        | EntityKind::PilotGear(list)
        | EntityKind::PilotWeapon(list) => list.bonuses.iter().collect(),
        EntityKind::Pilot(_) | EntityKind::NpcClass(_) | EntityKind::Status(_) => Vec::new(),
    };

    Ok(bonuses)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bonus::BonusKind;
    use crate::entity::{
        BonusList, CoreSystem, Frame, FrameTrait, MechWeapon, NpcClass, Pilot, Talent, TalentRank,
        WeaponProfile,
    };
    use crate::types::{WeaponSize, WeaponType};

    fn ids(bonuses: &[&Bonus]) -> Vec<String> {
        bonuses.iter().map(|b| b.id.clone()).collect()
    }

    fn frame() -> Entity {
        let frame = Frame {
            core_system: CoreSystem {
                name: "Core".into(),
                passive_bonuses: vec![Bonus::of(BonusKind::Hp, 5)],
                active_bonuses: vec![Bonus::of(BonusKind::Speed, 2)],
            },
            traits: vec![
                FrameTrait::new("Trait A", vec![Bonus::of(BonusKind::Armor, 1)]),
                FrameTrait::new("Trait B", vec![Bonus::of(BonusKind::Evasion, 1)]).locked(),
            ],
            ..Frame::default()
        };
        Entity::new("frame", "Frame", EntityKind::Frame(frame)).equipped(true)
    }

    #[test]
    fn frame_collects_passive_and_unlocked_traits() {
        let entity = frame();
        let bonuses = extract_bonuses(&entity, &ActorContext::default()).unwrap();
        assert_eq!(ids(&bonuses), ["hp", "armor"]);
    }

    #[test]
    fn frame_adds_active_core_bonuses_while_core_is_active() {
        let entity = frame();
        let actor = ActorContext::default().with_core_active();
        let bonuses = extract_bonuses(&entity, &actor).unwrap();
        assert_eq!(ids(&bonuses), ["hp", "speed", "armor"]);
    }

    #[test]
    fn talent_includes_ranks_through_current() {
        let talent = Talent {
            ranks: (0..4i32)
                .map(|i| TalentRank {
                    name: format!("Rank {i}"),
                    bonuses: vec![Bonus::new(format!("rank_{i}"), i)],
                })
                .collect(),
            curr_rank: 2,
        };
        let entity = Entity::new("t", "Ace", EntityKind::Talent(talent));
        let bonuses = extract_bonuses(&entity, &ActorContext::default()).unwrap();
        assert_eq!(ids(&bonuses), ["rank_0", "rank_1", "rank_2"]);
    }

    #[test]
    fn weapon_uses_only_the_active_profile() {
        let mut weapon = MechWeapon::new(
            WeaponSize::Main,
            vec![
                WeaponProfile::new(WeaponType::Rifle).with_bonus(Bonus::of(BonusKind::Attack, 1)),
                WeaponProfile::new(WeaponType::Cannon).with_bonus(Bonus::of(BonusKind::Range, 2)),
            ],
        );
        weapon.selected_profile = 1;
        let entity = Entity::new("w", "Variable Sword", EntityKind::MechWeapon(weapon));

        let bonuses = extract_bonuses(&entity, &ActorContext::default()).unwrap();
        assert_eq!(ids(&bonuses), ["range"]);
    }

    #[test]
    fn weapon_without_active_profile_fails_with_context() {
        let weapon = MechWeapon::new(WeaponSize::Main, Vec::new());
        let entity = Entity::new("w-9", "Broken", EntityKind::MechWeapon(weapon));

        let err = extract_bonuses(&entity, &ActorContext::default()).unwrap_err();
        match err {
            EffectError::MissingActiveProfile { context, .. } => {
                assert_eq!(context.entity.as_deref(), Some("w-9"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn innate_only_entities_have_no_bonus_list() {
        let actor = ActorContext::default();
        for kind in [
            EntityKind::Pilot(Pilot::default()),
            EntityKind::NpcClass(NpcClass::default()),
        ] {
            let entity = Entity::new("x", "x", kind);
            assert!(extract_bonuses(&entity, &actor).unwrap().is_empty());
        }

        let gear = Entity::new(
            "g",
            "Armor",
            EntityKind::PilotArmor(BonusList::new(vec![Bonus::of(BonusKind::PilotHp, 2)])),
        );
        assert_eq!(ids(&extract_bonuses(&gear, &actor).unwrap()), ["pilot_hp"]);
    }
}
