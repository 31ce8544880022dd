use arena::{BattleLog, Event, Format, Narrator, Race};

#[test]
fn events_render_as_single_lines() {
    let attack = Event::Attack {
        attacker: Race::Orc,
        target: Race::Dwarf,
        damage: 10,
        target_health: 80,
        target_max_health: 90,
    };
    insta::assert_snapshot!(
        attack.to_string(),
        @"Orc attacks Dwarf for 10 damage (Dwarf HP 80/90)"
    );

    let start = Event::BattleStart {
        first: Race::Human,
        second: Race::Elf,
    };
    insta::assert_snapshot!(start.to_string(), @"BATTLE: Human vs Elf");

    let end = Event::BattleEnd {
        winner: Some(Race::Elf),
        rounds: 4,
    };
    insta::assert_snapshot!(end.to_string(), @"Winner: Elf after 4 rounds");

    let tally = Event::TallyLine {
        race: Race::Dwarf,
        wins: 2,
    };
    insta::assert_snapshot!(tally.to_string(), @"Dwarf: 2 wins");
}

#[test]
fn events_encode_as_tagged_json() {
    let attack = Event::Attack {
        attacker: Race::Orc,
        target: Race::Dwarf,
        damage: 10,
        target_health: 80,
        target_max_health: 90,
    };
    assert_eq!(
        attack.to_json_line().expect("encodes"),
        concat!(
            r#"{"kind":"attack","attacker":"orc","target":"dwarf","damage":10,"#,
            r#""target_health":80,"target_max_health":90}"#,
        )
    );

    let draw = Event::BattleEnd {
        winner: None,
        rounds: 20,
    };
    assert_eq!(
        draw.to_json_line().expect("encodes"),
        r#"{"kind":"battle_end","winner":null,"rounds":20}"#
    );

    let start = Event::TournamentStart {
        format: Format::Sequential,
    };
    assert_eq!(
        start.to_json_line().expect("encodes"),
        r#"{"kind":"tournament_start","format":"sequential"}"#
    );
}

#[test]
fn battle_log_keeps_emission_order() {
    let mut log = BattleLog::new();
    log.emit(Event::Round { number: 1 });
    log.emit(Event::Death { race: Race::Elf });

    assert_eq!(
        log.lines(),
        vec!["--- Round 1 ---".to_string(), "Elf has fallen!".to_string()]
    );
    assert_eq!(log.into_events().len(), 2);
}
