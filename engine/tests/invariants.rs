use arena::{Armor, ArmorSlot, Combatant, Race, Silent, Weapon, MIN_DAMAGE};
use proptest::prelude::*;

#[derive(Debug, Clone, Copy)]
enum Op {
    LeftStrikes,
    RightStrikes,
    RestoreLeft,
    RestoreRight,
}

fn race() -> impl Strategy<Value = Race> {
    prop::sample::select(Race::ALL.to_vec())
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => Just(Op::LeftStrikes),
        4 => Just(Op::RightStrikes),
        1 => Just(Op::RestoreLeft),
        1 => Just(Op::RestoreRight),
    ]
}

fn kitted(race: Race, weapon: Option<u32>, armor: [u32; 4]) -> Combatant {
    let mut c = Combatant::new(race);
    if let Some(damage) = weapon {
        c.equip_weapon(Weapon::new("test weapon", damage));
    }
    for (slot, defense) in ArmorSlot::ALL.into_iter().zip(armor) {
        if defense > 0 {
            c.equip_armor(slot, Armor::new("test armor", defense, slot));
        }
    }
    c
}

fn consistent(c: &Combatant) -> bool {
    (0..=c.max_health()).contains(&c.health()) && c.is_alive() == (c.health() > 0)
}

proptest! {
    #[test]
    fn strikes_always_land_for_at_least_the_floor(
        a in race(),
        b in race(),
        weapon in prop::option::of(any::<u32>()),
        armor in prop::array::uniform4(any::<u32>()),
    ) {
        let attacker = kitted(a, weapon, [0; 4]);
        let mut target = kitted(b, None, armor);
        let before = target.health();

        let strike = attacker.attack(&mut target, &mut Silent).expect("both alive");
        prop_assert!(strike.damage >= MIN_DAMAGE);
        prop_assert_eq!(before - target.health(), strike.damage.min(before));
    }

    #[test]
    fn health_and_alive_stay_consistent(
        left in race(),
        right in race(),
        left_weapon in prop::option::of(0u32..60),
        right_weapon in prop::option::of(0u32..60),
        left_armor in prop::array::uniform4(0u32..30),
        right_armor in prop::array::uniform4(0u32..30),
        ops in prop::collection::vec(op(), 0..80),
    ) {
        let mut l = kitted(left, left_weapon, left_armor);
        let mut r = kitted(right, right_weapon, right_armor);

        for op in ops {
            match op {
                Op::LeftStrikes => { l.attack(&mut r, &mut Silent); }
                Op::RightStrikes => { r.attack(&mut l, &mut Silent); }
                Op::RestoreLeft => l.restore_health(),
                Op::RestoreRight => r.restore_health(),
            }
            prop_assert!(consistent(&l));
            prop_assert!(consistent(&r));
        }
    }

    #[test]
    fn duels_always_terminate_within_the_cap(
        a in race(),
        b in race(),
        cap in 0u32..40,
        armor in prop::array::uniform4(any::<u32>()),
    ) {
        let mut first = kitted(a, None, armor);
        let mut second = kitted(b, None, armor);
        let outcome = arena::fight(&mut first, &mut second, cap, &mut Silent);
        prop_assert!(outcome.rounds <= cap);
        prop_assert_eq!(outcome.is_draw(), first.is_alive() && second.is_alive());
    }
}
