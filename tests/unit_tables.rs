use approx::assert_relative_eq;
use irrigation_toolbox::calculator::CalculatorKind;
use irrigation_toolbox::units::{self, all_tables};
use irrigation_toolbox::{conversion, CalcError};

#[test]
fn every_unit_round_trips_through_canonical() {
    for table in all_tables() {
        for unit in table.units {
            for v in [0.001, 1.0, 12.5, 37.0, 10_000.0] {
                let back = unit.from_canonical(unit.to_canonical(v));
                assert_relative_eq!(back, v, max_relative = 1e-9);
            }
        }
    }
}

#[test]
fn every_table_has_exactly_one_canonical_unit() {
    for table in all_tables() {
        let count = table.units.iter().filter(|u| u.factor.is_identity()).count();
        assert_eq!(count, 1, "table {}", table.name);
    }
}

#[test]
fn unit_ids_are_unique_within_a_table() {
    for table in all_tables() {
        let mut ids: Vec<_> = table.ids().collect();
        let before = ids.len();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(before, ids.len(), "table {}", table.name);
    }
}

#[test]
fn every_calculator_table_is_registered() {
    for kind in CalculatorKind::ALL {
        for table in kind.unit_tables() {
            let found = units::table(table.name).expect("registered");
            assert!(std::ptr::eq(found, *table));
        }
    }
}

#[test]
fn convert_within_table() {
    let v = conversion::convert("drip.flow", 1.0, "gpm", "gph").unwrap();
    assert_relative_eq!(v, 60.0);

    let m = conversion::convert_measurement("velocity.output", 10.0, "fps", "mps").unwrap();
    assert_relative_eq!(m.value, 3.048, max_relative = 1e-12);
    assert_eq!(m.label, "mps");

    let hp = conversion::convert("pump.power", 7.457, "kW", "HP").unwrap();
    assert_relative_eq!(hp, 10.0, max_relative = 1e-12);
}

#[test]
fn unknown_identifiers_are_errors() {
    assert_eq!(
        units::table("no.such.table").unwrap_err(),
        CalcError::UnknownTable("no.such.table".into())
    );
    let err = conversion::convert("drip.flow", 1.0, "gpm", "furlongs").unwrap_err();
    assert!(matches!(err, CalcError::UnknownUnit { table: "drip.flow", .. }));
}

#[test]
fn acre_inch_factor_differs_between_calculators() {
    let pipe = conversion::convert("pipe_size.flow", 1.0, "acre-in/day", "gpm").unwrap();
    let friction = conversion::convert("friction_loss.flow", 1.0, "acre-in-day", "gpm").unwrap();
    assert_relative_eq!(pipe, 18.7);
    assert_relative_eq!(friction, 18.857);
}
