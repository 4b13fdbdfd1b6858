use std::io::Write;
use std::path::Path;

use thiserror::Error;

use crate::application::{drip_line, frequency, nozzle};
use crate::calculator::CalculatorKind;
use crate::cli::{Cli, Command};
use crate::config::{Config, ConfigError, OutputFormat};
use crate::conversion;
use crate::error::CalcError;
use crate::hose::garden_hose;
use crate::material_db;
use crate::piping::{friction_loss, minimum_size, water_velocity};
use crate::pumping::{horsepower, system_requirements};
use crate::quantity::Measurement;
use crate::report::{format_number, Report};
use crate::units::{self, UnitTable};

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Calc(#[from] CalcError),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("'{0}' already exists (use --force to overwrite)")]
    ConfigExists(String),
}

/// 명령행 플래그와 설정 파일을 합친 출력 옵션.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputOptions {
    pub format: OutputFormat,
    pub digits: Option<usize>,
}

impl OutputOptions {
    pub fn resolve(cli: &Cli, config: &Config) -> Self {
        Self {
            format: if cli.json {
                OutputFormat::Json
            } else {
                config.output.format
            },
            digits: cli.digits.or(config.output.max_fraction_digits),
        }
    }
}

/// 하위 명령 하나를 실행하고 결과를 `out`에 쓴다.
pub fn run(cli: Cli, config: &Config, out: &mut dyn Write) -> Result<(), AppError> {
    let opts = OutputOptions::resolve(&cli, config);
    let config_path = cli.config;
    tracing::debug!(command = ?cli.command, "running command");

    let report = match cli.command {
        Command::Drip(args) => {
            let result = drip_line::drip_application_rate(&args.into())?;
            Report::for_calculator(CalculatorKind::DripLine, opts.digits)
                .row("Application rate", result)
        }
        Command::Hose(args) => {
            let result = garden_hose::garden_hose(&args.into())?;
            Report::for_calculator(CalculatorKind::GardenHose, opts.digits)
                .row("Flow rate", result.map(|r| r.flow))
                .row("Fill time", result.and_then(|r| r.fill_time))
        }
        Command::Frequency(args) => {
            let result = frequency::irrigation_frequency(&args.into())?;
            Report::for_calculator(CalculatorKind::IrrigationFrequency, opts.digits)
                .row("Irrigation frequency", result)
        }
        Command::PipeSize(args) => {
            let result = minimum_size::minimum_pipe_size(&args.into_input()?)?;
            Report::for_calculator(CalculatorKind::MinimumPipeSize, opts.digits)
                .row("Minimum inside diameter", result)
        }
        Command::Nozzle(args) => {
            let result = nozzle::nozzle_application_rate(&args.into())?;
            Report::for_calculator(CalculatorKind::Nozzle, opts.digits)
                .row("Nozzle flow", result.map(|r| r.flow))
                .row("Application rate", result.map(|r| r.application_rate))
        }
        Command::FrictionLoss(args) => {
            let result = friction_loss::friction_loss(&args.into_input()?)?;
            Report::for_calculator(CalculatorKind::FrictionLoss, opts.digits)
                .row("Friction loss", result)
        }
        Command::Velocity(args) => {
            let result = water_velocity::water_velocity(&args.into())?;
            Report::for_calculator(CalculatorKind::WaterVelocity, opts.digits)
                .row("Velocity", result)
        }
        Command::MinDiameter(args) => {
            let result = water_velocity::minimum_diameter(&args.into())?;
            Report::for_calculator(CalculatorKind::WaterVelocity, opts.digits)
                .row("Minimum diameter (5 ft/s)", result)
        }
        Command::Pump(args) => {
            let result = horsepower::pump_horsepower(&args.into())?;
            Report::for_calculator(CalculatorKind::PumpHorsepower, opts.digits)
                .row(
                    "Total head",
                    result.map(|r| Measurement {
                        value: r.total_head_ft,
                        unit: "ft",
                        label: "ft",
                    }),
                )
                .row("Water horsepower", result.map(|r| r.water_power))
                .row("Brake horsepower", result.map(|r| r.brake_power))
                .row("Motor power", result.map(|r| r.motor_power))
        }
        Command::SystemPumping(args) => {
            let result = system_requirements::system_pumping_requirement(&args.into())?;
            Report::for_calculator(CalculatorKind::SystemPumping, opts.digits)
                .row("Required flow", result)
        }
        Command::Convert(args) => {
            let m = conversion::convert_measurement(&args.table, args.value, &args.from, &args.to)?;
            Report::new("Unit Conversion", opts.digits.unwrap_or(6)).row("Result", Some(m))
        }
        Command::Units(args) => return list_units(args.table.as_deref(), opts, out),
        Command::Materials => return list_materials(opts, out),
        Command::InitConfig(args) => return init_config(&config_path, args.force, out),
    };

    write_report(&report, opts, out)
}

fn write_report(report: &Report, opts: OutputOptions, out: &mut dyn Write) -> Result<(), AppError> {
    match opts.format {
        OutputFormat::Text => write!(out, "{}", report.to_text())?,
        OutputFormat::Json => writeln!(out, "{}", report.to_json()?)?,
    }
    Ok(())
}

fn list_units(
    name: Option<&str>,
    opts: OutputOptions,
    out: &mut dyn Write,
) -> Result<(), AppError> {
    let tables: Vec<&'static UnitTable> = match name {
        Some(name) => vec![units::table(name)?],
        None => units::all_tables().to_vec(),
    };
    if opts.format == OutputFormat::Json {
        writeln!(out, "{}", serde_json::to_string_pretty(&tables)?)?;
        return Ok(());
    }
    for table in tables {
        let canonical = table.canonical().map(|u| u.id).unwrap_or("-");
        writeln!(
            out,
            "{} ({}, canonical {})",
            table.name,
            table.quantity.name(),
            canonical
        )?;
        for unit in table.units {
            writeln!(out, "  {:<14} {}", unit.id, unit.label)?;
        }
    }
    Ok(())
}

fn list_materials(opts: OutputOptions, out: &mut dyn Write) -> Result<(), AppError> {
    let sets = [
        ("friction-loss", material_db::FRICTION_LOSS_MATERIALS),
        ("pipe-size", material_db::PIPE_SIZE_MATERIALS),
    ];
    if opts.format == OutputFormat::Json {
        let map: serde_json::Map<String, serde_json::Value> = sets
            .iter()
            .map(|(name, table)| {
                Ok::<_, serde_json::Error>((name.to_string(), serde_json::to_value(table)?))
            })
            .collect::<Result<_, _>>()?;
        writeln!(out, "{}", serde_json::to_string_pretty(&map)?)?;
        return Ok(());
    }
    for (name, table) in sets {
        writeln!(out, "{name}")?;
        for material in table {
            writeln!(out, "  {:<24} C = {}", material.name, format_number(material.c, 0))?;
        }
    }
    Ok(())
}

fn init_config(path: &Path, force: bool, out: &mut dyn Write) -> Result<(), AppError> {
    if path.exists() && !force {
        return Err(AppError::ConfigExists(path.display().to_string()));
    }
    Config::default().save(path)?;
    writeln!(out, "wrote {}", path.display())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn run_args(args: &[&str]) -> Result<String, AppError> {
        let cli = Cli::try_parse_from(args).expect("valid args");
        let mut buf = Vec::new();
        run(cli, &Config::default(), &mut buf)?;
        Ok(String::from_utf8(buf).expect("utf8"))
    }

    #[test]
    fn drip_text_output() {
        let out = run_args(&[
            "irrigation_toolbox",
            "drip",
            "--flow",
            "2",
            "--row",
            "36",
            "--emitter",
            "18",
        ])
        .unwrap();
        assert_eq!(
            out,
            "Drip Line Application Rate\n  Application rate: 0.6773 in/hr\n"
        );
    }

    #[test]
    fn hose_without_volume_reports_missing_fill_time() {
        let out = run_args(&["irrigation_toolbox", "hose"]).unwrap();
        assert!(out.contains("Flow rate: 25 gpm"), "{out}");
        assert!(out.contains("Fill time: no result"), "{out}");
    }

    #[test]
    fn json_output_has_null_for_missing_result() {
        let out = run_args(&["irrigation_toolbox", "--json", "velocity", "--flow", "100"]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["title"], "Pipe Water Velocity");
        assert!(value["rows"][0]["value"].is_null());
    }

    #[test]
    fn unknown_unit_is_an_error() {
        let err = run_args(&[
            "irrigation_toolbox",
            "velocity",
            "--flow",
            "100",
            "--diameter",
            "4",
            "--output-unit",
            "knots",
        ])
        .unwrap_err();
        assert!(matches!(err, AppError::Calc(CalcError::UnknownUnit { .. })));
    }

    #[test]
    fn convert_command() {
        let out = run_args(&["irrigation_toolbox", "convert", "pump.power", "10", "HP", "kW"])
            .unwrap();
        assert!(out.contains("Result: 7.457 kW"), "{out}");
    }
}
