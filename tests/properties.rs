//! 공식의 단조성, 반복 호출 안정성, 경계 입력 처리.
use irrigation_toolbox::application::{drip_line, frequency, nozzle};
use irrigation_toolbox::hose::garden_hose;
use irrigation_toolbox::piping::{friction_loss, minimum_size, water_velocity};
use irrigation_toolbox::pumping::{horsepower, system_requirements};
use irrigation_toolbox::CalcError;

fn drip(flow: f64, row: f64, emitter: f64) -> f64 {
    let input = drip_line::DripLineInput {
        flow: Some(flow),
        row_spacing: Some(row),
        emitter_spacing: Some(emitter),
        ..Default::default()
    };
    drip_line::drip_application_rate(&input).unwrap().unwrap().value
}

fn loss(length: f64, flow: f64, diameter: f64) -> f64 {
    let input = friction_loss::FrictionLossInput {
        length: Some(length),
        flow: Some(flow),
        diameter: Some(diameter),
        ..Default::default()
    };
    friction_loss::friction_loss(&input).unwrap().unwrap().value
}

#[test]
fn drip_rate_rises_with_flow_and_falls_with_spacing() {
    assert!(drip(2.0, 36.0, 18.0) < drip(3.0, 36.0, 18.0));
    assert!(drip(2.0, 36.0, 18.0) > drip(2.0, 48.0, 18.0));
    assert!(drip(2.0, 36.0, 18.0) > drip(2.0, 36.0, 24.0));
}

#[test]
fn friction_loss_rises_with_flow_and_length_and_falls_with_diameter() {
    let base = loss(1000.0, 100.0, 6.0);
    assert!(base < loss(1000.0, 150.0, 6.0));
    assert!(base < loss(2000.0, 100.0, 6.0));
    assert!(base > loss(1000.0, 100.0, 8.0));
}

#[test]
fn friction_loss_falls_with_smoother_pipe() {
    let rough = friction_loss::hazen_williams_loss_psi(1000.0, 100.0, 6.0, 100.0);
    let smooth = friction_loss::hazen_williams_loss_psi(1000.0, 100.0, 6.0, 150.0);
    assert!(smooth < rough);
}

#[test]
fn nozzle_rate_rises_with_pressure() {
    let rate = |p: f64| {
        let input = nozzle::NozzleInput {
            diameter: Some(0.25),
            pressure: Some(p),
            spacing_x: Some(30.0),
            spacing_y: Some(30.0),
            ..Default::default()
        };
        nozzle::nozzle_application_rate(&input).unwrap().unwrap()
    };
    let low = rate(30.0);
    let high = rate(60.0);
    assert!(low.flow.value < high.flow.value);
    assert!(low.application_rate.value < high.application_rate.value);
}

#[test]
fn nozzle_rate_falls_with_spacing() {
    let rate = |x: f64, y: f64| {
        let input = nozzle::NozzleInput {
            diameter: Some(0.25),
            pressure: Some(50.0),
            spacing_x: Some(x),
            spacing_y: Some(y),
            ..Default::default()
        };
        let res = nozzle::nozzle_application_rate(&input).unwrap().unwrap();
        res.application_rate.value
    };
    assert!(rate(30.0, 30.0) > rate(40.0, 30.0));
    assert!(rate(30.0, 30.0) > rate(30.0, 40.0));
}

#[test]
fn repeated_calls_give_identical_results() {
    let input = horsepower::PumpInput {
        pressure: Some(40.0),
        flow: Some(500.0),
        pump_efficiency: Some(75.0),
        motor_efficiency: Some(90.0),
        ..Default::default()
    };
    let first = horsepower::pump_horsepower(&input).unwrap();
    let second = horsepower::pump_horsepower(&input).unwrap();
    assert_eq!(first, second);

    assert_eq!(drip(2.0, 36.0, 18.0).to_bits(), drip(2.0, 36.0, 18.0).to_bits());
}

#[test]
fn empty_inputs_give_no_result() {
    assert_eq!(drip_line::drip_application_rate(&Default::default()), Ok(None));
    assert_eq!(frequency::irrigation_frequency(&Default::default()), Ok(None));
    assert_eq!(nozzle::nozzle_application_rate(&Default::default()), Ok(None));
    assert_eq!(friction_loss::friction_loss(&Default::default()), Ok(None));
    assert_eq!(minimum_size::minimum_pipe_size(&Default::default()), Ok(None));
    assert_eq!(water_velocity::water_velocity(&Default::default()), Ok(None));
    assert_eq!(water_velocity::minimum_diameter(&Default::default()), Ok(None));
    assert_eq!(horsepower::pump_horsepower(&Default::default()), Ok(None));
    assert_eq!(
        system_requirements::system_pumping_requirement(&Default::default()),
        Ok(None)
    );
}

#[test]
fn zero_or_negative_inputs_give_no_result() {
    for bad in [0.0, -1.0] {
        let input = drip_line::DripLineInput {
            flow: Some(2.0),
            row_spacing: Some(bad),
            emitter_spacing: Some(18.0),
            ..Default::default()
        };
        assert_eq!(drip_line::drip_application_rate(&input), Ok(None));

        let input = friction_loss::FrictionLossInput {
            length: Some(1000.0),
            flow: Some(100.0),
            diameter: Some(bad),
            ..Default::default()
        };
        assert_eq!(friction_loss::friction_loss(&input), Ok(None));

        let input = water_velocity::VelocityInput {
            flow: Some(bad),
            diameter: Some(4.0),
            ..Default::default()
        };
        assert_eq!(water_velocity::water_velocity(&input), Ok(None));

        let input = frequency::FrequencyInput {
            available_water: Some(1.5),
            root_zone: Some(2.0),
            allowable_depletion: Some(0.5),
            crop_et: Some(bad),
            ..Default::default()
        };
        assert_eq!(frequency::irrigation_frequency(&input), Ok(None));

        let input = system_requirements::SystemPumpingInput {
            net_application: Some(1.5),
            area: Some(100.0),
            hours_per_day: Some(20.0),
            days: Some(6.0),
            efficiency: Some(bad),
            ..Default::default()
        };
        assert_eq!(system_requirements::system_pumping_requirement(&input), Ok(None));
    }
}

#[test]
fn every_nozzle_input_must_be_positive() {
    let valid = nozzle::NozzleInput {
        diameter: Some(0.25),
        pressure: Some(50.0),
        spacing_x: Some(30.0),
        spacing_y: Some(30.0),
        ..Default::default()
    };
    assert!(nozzle::nozzle_application_rate(&valid).unwrap().is_some());

    for bad in [0.0, -1.0] {
        let setters: [fn(&mut nozzle::NozzleInput, f64); 5] = [
            |i, v| i.diameter = Some(v),
            |i, v| i.pressure = Some(v),
            |i, v| i.efficiency = Some(v),
            |i, v| i.spacing_x = Some(v),
            |i, v| i.spacing_y = Some(v),
        ];
        for set in setters {
            let mut input = valid.clone();
            set(&mut input, bad);
            assert_eq!(nozzle::nozzle_application_rate(&input), Ok(None), "{input:?}");
        }
    }
}

#[test]
fn every_pipe_size_input_must_be_positive() {
    let valid = minimum_size::PipeSizeInput {
        flow: Some(100.0),
        length: Some(1000.0),
        max_loss: Some(5.0),
        ..Default::default()
    };
    assert!(minimum_size::minimum_pipe_size(&valid).unwrap().is_some());

    for bad in [0.0, -1.0] {
        let setters: [fn(&mut minimum_size::PipeSizeInput, f64); 4] = [
            |i, v| i.flow = Some(v),
            |i, v| i.length = Some(v),
            |i, v| i.c = Some(v),
            |i, v| i.max_loss = Some(v),
        ];
        for set in setters {
            let mut input = valid.clone();
            set(&mut input, bad);
            assert_eq!(minimum_size::minimum_pipe_size(&input), Ok(None), "{input:?}");
        }
    }
}

#[test]
fn friction_loss_c_must_be_positive() {
    let valid = friction_loss::FrictionLossInput {
        length: Some(1000.0),
        flow: Some(100.0),
        diameter: Some(6.0),
        ..Default::default()
    };
    for bad in [0.0, -1.0] {
        let input = friction_loss::FrictionLossInput {
            c: Some(bad),
            ..valid.clone()
        };
        assert_eq!(friction_loss::friction_loss(&input), Ok(None));
    }
    let input = friction_loss::FrictionLossInput {
        c: None,
        ..valid
    };
    assert_eq!(friction_loss::friction_loss(&input), Ok(None));
}

#[test]
fn minimum_diameter_flow_must_be_positive() {
    for bad in [0.0, -1.0] {
        let input = water_velocity::MinDiameterInput {
            flow: Some(bad),
            ..Default::default()
        };
        assert_eq!(water_velocity::minimum_diameter(&input), Ok(None));
    }
}

#[test]
fn every_pump_input_must_be_positive() {
    let valid = horsepower::PumpInput {
        pressure: Some(40.0),
        flow: Some(500.0),
        pump_efficiency: Some(75.0),
        motor_efficiency: Some(90.0),
        ..Default::default()
    };
    assert!(horsepower::pump_horsepower(&valid).unwrap().is_some());

    for bad in [0.0, -1.0] {
        let setters: [fn(&mut horsepower::PumpInput, f64); 4] = [
            |i, v| i.pressure = Some(v),
            |i, v| i.flow = Some(v),
            |i, v| i.pump_efficiency = Some(v),
            |i, v| i.motor_efficiency = Some(v),
        ];
        for set in setters {
            let mut input = valid.clone();
            set(&mut input, bad);
            assert_eq!(horsepower::pump_horsepower(&input), Ok(None), "{input:?}");
        }
    }
}

#[test]
fn overflowing_results_give_no_result() {
    let input = drip_line::DripLineInput {
        flow: Some(2.0),
        row_spacing: Some(1e-160),
        emitter_spacing: Some(1e-160),
        ..Default::default()
    };
    assert_eq!(drip_line::drip_application_rate(&input), Ok(None));

    let input = minimum_size::PipeSizeInput {
        flow: Some(1e300),
        length: Some(1e300),
        max_loss: Some(1e-300),
        ..Default::default()
    };
    assert_eq!(minimum_size::minimum_pipe_size(&input), Ok(None));

    let input = nozzle::NozzleInput {
        diameter: Some(1e200),
        pressure: Some(50.0),
        spacing_x: Some(30.0),
        spacing_y: Some(30.0),
        ..Default::default()
    };
    assert_eq!(nozzle::nozzle_application_rate(&input), Ok(None));

    let input = horsepower::PumpInput {
        pressure: Some(1e300),
        flow: Some(1e300),
        pump_efficiency: Some(75.0),
        motor_efficiency: Some(90.0),
        ..Default::default()
    };
    assert_eq!(horsepower::pump_horsepower(&input), Ok(None));

    let input = water_velocity::VelocityInput {
        flow: Some(1e300),
        diameter: Some(1e-300),
        ..Default::default()
    };
    assert_eq!(water_velocity::water_velocity(&input), Ok(None));
}

#[test]
fn hose_combination_outside_table_gives_no_result() {
    let input = garden_hose::GardenHoseInput {
        pressure: "55".into(),
        ..Default::default()
    };
    assert_eq!(garden_hose::garden_hose(&input), Ok(None));

    let input = garden_hose::GardenHoseInput {
        volume: Some(0.0),
        ..Default::default()
    };
    let res = garden_hose::garden_hose(&input).unwrap().expect("flow");
    assert_eq!(res.flow.value, 25.0);
    assert!(res.fill_time.is_none());
}

#[test]
fn unknown_unit_fails_even_without_values() {
    let input = drip_line::DripLineInput {
        output_unit: "furlongs/fortnight".into(),
        ..Default::default()
    };
    let err = drip_line::drip_application_rate(&input).unwrap_err();
    assert_eq!(
        err,
        CalcError::UnknownUnit {
            table: "application_rate",
            unit: "furlongs/fortnight".into(),
        }
    );

    let input = horsepower::PumpInput {
        pump_efficiency_unit: "permille".into(),
        ..Default::default()
    };
    assert!(horsepower::pump_horsepower(&input).is_err());
}

#[test]
fn input_records_deserialize_with_defaults() {
    let input: drip_line::DripLineInput =
        serde_json::from_str(r#"{"flow": 2, "row_spacing": 36, "emitter_spacing": 18}"#).unwrap();
    assert_eq!(input.flow_unit, "gph");
    assert_eq!(input.output_unit, "inhr");
    let from_json = drip_line::drip_application_rate(&input).unwrap().unwrap();
    assert_eq!(drip(2.0, 36.0, 18.0), from_json.value);

    let input: friction_loss::FrictionLossInput =
        serde_json::from_str(r#"{"length": 1000, "flow": 100, "diameter": 6}"#).unwrap();
    assert_eq!(input.c, Some(150.0));
}
