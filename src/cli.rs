//! 명령행 인자 정의. 각 계산기 하위 명령은 폼 입력과 같은 모양의 인자를 받는다.
//!
//! 숫자 인자는 문자열 그대로 받아 [`parse_field`]로 읽으므로, 비어 있거나 숫자가 아니면
//! 오류 대신 "결과 없음"으로 처리된다.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::application::{
    drip_line::DripLineInput, frequency::FrequencyInput, nozzle::NozzleInput,
};
use crate::error::CalcResult;
use crate::field::parse_field;
use crate::hose::garden_hose::GardenHoseInput;
use crate::material_db::{self, PipeMaterial};
use crate::piping::{
    friction_loss::FrictionLossInput,
    minimum_size::PipeSizeInput,
    water_velocity::{MinDiameterInput, VelocityInput},
};
use crate::pumping::{horsepower::PumpInput, system_requirements::SystemPumpingInput};

#[derive(Debug, Parser)]
#[command(name = "irrigation_toolbox", version, about = "Irrigation engineering unit calculators")]
pub struct Cli {
    /// TOML 설정 파일 경로
    #[arg(long, global = true, default_value = "config.toml")]
    pub config: PathBuf,

    /// JSON 으로 출력
    #[arg(long, global = true)]
    pub json: bool,

    /// 최대 소수 자릿수
    #[arg(long, global = true)]
    pub digits: Option<usize>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Drip line application rate
    Drip(DripArgs),
    /// Garden hose flow rate and fill time
    Hose(HoseArgs),
    /// Irrigation frequency
    Frequency(FrequencyArgs),
    /// Minimum pipe size for an allowable friction loss
    PipeSize(PipeSizeArgs),
    /// Sprinkler nozzle flow and application rate
    Nozzle(NozzleArgs),
    /// Hazen-Williams pipe friction loss
    FrictionLoss(FrictionLossArgs),
    /// Pipe water velocity
    Velocity(VelocityArgs),
    /// Minimum pipe diameter for 5 ft/s
    MinDiameter(MinDiameterArgs),
    /// Pump brake and motor horsepower
    Pump(PumpArgs),
    /// System pumping requirement
    SystemPumping(SystemPumpingArgs),
    /// Convert a value within one unit table
    Convert(ConvertArgs),
    /// List unit tables and their unit identifiers
    Units(UnitsArgs),
    /// List Hazen-Williams pipe materials
    Materials,
    /// Write a default configuration file
    InitConfig(InitConfigArgs),
}

fn num(raw: &Option<String>) -> Option<f64> {
    raw.as_deref().and_then(parse_field)
}

/// `--c` 와 `--material` 중 재질이 주어지면 재질 표의 C 값을 쓴다.
fn resolve_c(
    c: &Option<String>,
    material: &Option<String>,
    table: &'static [PipeMaterial],
) -> CalcResult<Option<f64>> {
    match material {
        Some(name) => material_db::hazen_williams_c(table, name).map(Some),
        None => Ok(num(c)),
    }
}

#[derive(Debug, Args)]
pub struct DripArgs {
    #[arg(long, allow_hyphen_values = true)]
    pub flow: Option<String>,
    #[arg(long, default_value = "gph")]
    pub flow_unit: String,
    #[arg(long, allow_hyphen_values = true)]
    pub row: Option<String>,
    #[arg(long, default_value = "in")]
    pub row_unit: String,
    #[arg(long, allow_hyphen_values = true)]
    pub emitter: Option<String>,
    #[arg(long, default_value = "in")]
    pub emitter_unit: String,
    #[arg(long, default_value = "inhr")]
    pub output_unit: String,
}

impl From<DripArgs> for DripLineInput {
    fn from(a: DripArgs) -> Self {
        Self {
            flow: num(&a.flow),
            flow_unit: a.flow_unit,
            row_spacing: num(&a.row),
            row_spacing_unit: a.row_unit,
            emitter_spacing: num(&a.emitter),
            emitter_spacing_unit: a.emitter_unit,
            output_unit: a.output_unit,
        }
    }
}

#[derive(Debug, Args)]
pub struct HoseArgs {
    /// Hose size: 1/2, 5/8, 3/4
    #[arg(long, default_value = "5/8")]
    pub size: String,
    /// Water pressure [psi]: 40, 45, 50, 60
    #[arg(long, default_value = "50")]
    pub pressure: String,
    /// Hose length [ft]: 25 .. 200
    #[arg(long, default_value = "50")]
    pub length: String,
    #[arg(long, default_value = "gpm")]
    pub flow_unit: String,
    #[arg(long, allow_hyphen_values = true)]
    pub volume: Option<String>,
    #[arg(long, default_value = "gal")]
    pub volume_unit: String,
    #[arg(long, default_value = "min")]
    pub time_unit: String,
}

impl From<HoseArgs> for GardenHoseInput {
    fn from(a: HoseArgs) -> Self {
        Self {
            size: a.size,
            pressure: a.pressure,
            length: a.length,
            flow_unit: a.flow_unit,
            volume: num(&a.volume),
            volume_unit: a.volume_unit,
            time_unit: a.time_unit,
        }
    }
}

#[derive(Debug, Args)]
pub struct FrequencyArgs {
    /// Available water capacity
    #[arg(long, allow_hyphen_values = true)]
    pub awc: Option<String>,
    #[arg(long, default_value = "inft")]
    pub awc_unit: String,
    /// Effective root zone depth
    #[arg(long, allow_hyphen_values = true)]
    pub root_zone: Option<String>,
    #[arg(long, default_value = "ft")]
    pub root_zone_unit: String,
    /// Management allowable depletion
    #[arg(long, allow_hyphen_values = true)]
    pub mad: Option<String>,
    #[arg(long, default_value = "decimal")]
    pub mad_unit: String,
    /// Crop evapotranspiration
    #[arg(long, allow_hyphen_values = true)]
    pub etc: Option<String>,
    #[arg(long, default_value = "inday")]
    pub etc_unit: String,
    #[arg(long, default_value = "day")]
    pub output_unit: String,
}

impl From<FrequencyArgs> for FrequencyInput {
    fn from(a: FrequencyArgs) -> Self {
        Self {
            available_water: num(&a.awc),
            available_water_unit: a.awc_unit,
            root_zone: num(&a.root_zone),
            root_zone_unit: a.root_zone_unit,
            allowable_depletion: num(&a.mad),
            allowable_depletion_unit: a.mad_unit,
            crop_et: num(&a.etc),
            crop_et_unit: a.etc_unit,
            output_unit: a.output_unit,
        }
    }
}

#[derive(Debug, Args)]
pub struct PipeSizeArgs {
    #[arg(long, allow_hyphen_values = true)]
    pub flow: Option<String>,
    #[arg(long, default_value = "gpm")]
    pub flow_unit: String,
    #[arg(long, allow_hyphen_values = true)]
    pub length: Option<String>,
    #[arg(long, default_value = "ft")]
    pub length_unit: String,
    /// Hazen-Williams C
    #[arg(long, default_value = "150", allow_hyphen_values = true)]
    pub c: Option<String>,
    /// Pipe material name (overrides --c)
    #[arg(long)]
    pub material: Option<String>,
    #[arg(long, allow_hyphen_values = true)]
    pub max_loss: Option<String>,
    #[arg(long, default_value = "psi")]
    pub max_loss_unit: String,
    #[arg(long, default_value = "in")]
    pub output_unit: String,
}

impl PipeSizeArgs {
    pub fn into_input(self) -> CalcResult<PipeSizeInput> {
        let c = resolve_c(&self.c, &self.material, material_db::PIPE_SIZE_MATERIALS)?;
        Ok(PipeSizeInput {
            flow: num(&self.flow),
            flow_unit: self.flow_unit,
            length: num(&self.length),
            length_unit: self.length_unit,
            c,
            max_loss: num(&self.max_loss),
            max_loss_unit: self.max_loss_unit,
            output_unit: self.output_unit,
        })
    }
}

#[derive(Debug, Args)]
pub struct NozzleArgs {
    #[arg(long, allow_hyphen_values = true)]
    pub diameter: Option<String>,
    #[arg(long, default_value = "in")]
    pub diameter_unit: String,
    #[arg(long, allow_hyphen_values = true)]
    pub pressure: Option<String>,
    #[arg(long, default_value = "psi")]
    pub pressure_unit: String,
    #[arg(long, default_value = "80", allow_hyphen_values = true)]
    pub efficiency: Option<String>,
    #[arg(long, default_value = "percent")]
    pub efficiency_unit: String,
    /// Sprinkler spacing along the lateral
    #[arg(long, allow_hyphen_values = true)]
    pub x: Option<String>,
    #[arg(long, default_value = "ft")]
    pub x_unit: String,
    /// Lateral spacing
    #[arg(long, allow_hyphen_values = true)]
    pub y: Option<String>,
    #[arg(long, default_value = "ft")]
    pub y_unit: String,
    #[arg(long, default_value = "gpm")]
    pub flow_unit: String,
    #[arg(long, default_value = "inhr")]
    pub rate_unit: String,
}

impl From<NozzleArgs> for NozzleInput {
    fn from(a: NozzleArgs) -> Self {
        Self {
            diameter: num(&a.diameter),
            diameter_unit: a.diameter_unit,
            pressure: num(&a.pressure),
            pressure_unit: a.pressure_unit,
            efficiency: num(&a.efficiency),
            efficiency_unit: a.efficiency_unit,
            spacing_x: num(&a.x),
            spacing_x_unit: a.x_unit,
            spacing_y: num(&a.y),
            spacing_y_unit: a.y_unit,
            flow_unit: a.flow_unit,
            rate_unit: a.rate_unit,
        }
    }
}

#[derive(Debug, Args)]
pub struct FrictionLossArgs {
    #[arg(long, allow_hyphen_values = true)]
    pub length: Option<String>,
    #[arg(long, default_value = "ft")]
    pub length_unit: String,
    #[arg(long, allow_hyphen_values = true)]
    pub flow: Option<String>,
    #[arg(long, default_value = "gpm")]
    pub flow_unit: String,
    #[arg(long, allow_hyphen_values = true)]
    pub diameter: Option<String>,
    #[arg(long, default_value = "in")]
    pub diameter_unit: String,
    /// Hazen-Williams C
    #[arg(long, default_value = "150", allow_hyphen_values = true)]
    pub c: Option<String>,
    /// Pipe material name (overrides --c)
    #[arg(long)]
    pub material: Option<String>,
    #[arg(long, default_value = "psi")]
    pub output_unit: String,
}

impl FrictionLossArgs {
    pub fn into_input(self) -> CalcResult<FrictionLossInput> {
        let c = resolve_c(&self.c, &self.material, material_db::FRICTION_LOSS_MATERIALS)?;
        Ok(FrictionLossInput {
            length: num(&self.length),
            length_unit: self.length_unit,
            flow: num(&self.flow),
            flow_unit: self.flow_unit,
            diameter: num(&self.diameter),
            diameter_unit: self.diameter_unit,
            c,
            output_unit: self.output_unit,
        })
    }
}

#[derive(Debug, Args)]
pub struct VelocityArgs {
    #[arg(long, allow_hyphen_values = true)]
    pub flow: Option<String>,
    #[arg(long, default_value = "gpm")]
    pub flow_unit: String,
    #[arg(long, allow_hyphen_values = true)]
    pub diameter: Option<String>,
    #[arg(long, default_value = "in")]
    pub diameter_unit: String,
    #[arg(long, default_value = "fps")]
    pub output_unit: String,
}

impl From<VelocityArgs> for VelocityInput {
    fn from(a: VelocityArgs) -> Self {
        Self {
            flow: num(&a.flow),
            flow_unit: a.flow_unit,
            diameter: num(&a.diameter),
            diameter_unit: a.diameter_unit,
            output_unit: a.output_unit,
        }
    }
}

#[derive(Debug, Args)]
pub struct MinDiameterArgs {
    #[arg(long, allow_hyphen_values = true)]
    pub flow: Option<String>,
    #[arg(long, default_value = "gpm")]
    pub flow_unit: String,
    #[arg(long, default_value = "in")]
    pub output_unit: String,
}

impl From<MinDiameterArgs> for MinDiameterInput {
    fn from(a: MinDiameterArgs) -> Self {
        Self {
            flow: num(&a.flow),
            flow_unit: a.flow_unit,
            output_unit: a.output_unit,
        }
    }
}

#[derive(Debug, Args)]
pub struct PumpArgs {
    #[arg(long, allow_hyphen_values = true)]
    pub pressure: Option<String>,
    #[arg(long, default_value = "psi")]
    pub pressure_unit: String,
    #[arg(long, allow_hyphen_values = true)]
    pub flow: Option<String>,
    #[arg(long, default_value = "gpm")]
    pub flow_unit: String,
    #[arg(long, allow_hyphen_values = true)]
    pub pump_eff: Option<String>,
    #[arg(long, default_value = "%")]
    pub pump_eff_unit: String,
    #[arg(long, allow_hyphen_values = true)]
    pub motor_eff: Option<String>,
    #[arg(long, default_value = "%")]
    pub motor_eff_unit: String,
    #[arg(long, default_value = "HP")]
    pub output_unit: String,
}

impl From<PumpArgs> for PumpInput {
    fn from(a: PumpArgs) -> Self {
        Self {
            pressure: num(&a.pressure),
            pressure_unit: a.pressure_unit,
            flow: num(&a.flow),
            flow_unit: a.flow_unit,
            pump_efficiency: num(&a.pump_eff),
            pump_efficiency_unit: a.pump_eff_unit,
            motor_efficiency: num(&a.motor_eff),
            motor_efficiency_unit: a.motor_eff_unit,
            output_unit: a.output_unit,
        }
    }
}

#[derive(Debug, Args)]
pub struct SystemPumpingArgs {
    /// Net application depth
    #[arg(long, allow_hyphen_values = true)]
    pub net_app: Option<String>,
    #[arg(long, default_value = "in")]
    pub net_app_unit: String,
    #[arg(long, allow_hyphen_values = true)]
    pub area: Option<String>,
    #[arg(long, default_value = "acres")]
    pub area_unit: String,
    /// Operating hours per day
    #[arg(long, allow_hyphen_values = true)]
    pub hours: Option<String>,
    /// Days per irrigation cycle
    #[arg(long, allow_hyphen_values = true)]
    pub days: Option<String>,
    #[arg(long, allow_hyphen_values = true)]
    pub eff: Option<String>,
    #[arg(long, default_value = "percent")]
    pub eff_unit: String,
    #[arg(long, default_value = "gpm")]
    pub output_unit: String,
}

impl From<SystemPumpingArgs> for SystemPumpingInput {
    fn from(a: SystemPumpingArgs) -> Self {
        Self {
            net_application: num(&a.net_app),
            net_application_unit: a.net_app_unit,
            area: num(&a.area),
            area_unit: a.area_unit,
            hours_per_day: num(&a.hours),
            days: num(&a.days),
            efficiency: num(&a.eff),
            efficiency_unit: a.eff_unit,
            output_unit: a.output_unit,
            ..SystemPumpingInput::default()
        }
    }
}

#[derive(Debug, Args)]
pub struct ConvertArgs {
    /// Unit table name, e.g. pump.flow (see `units`)
    pub table: String,
    #[arg(allow_hyphen_values = true)]
    pub value: f64,
    pub from: String,
    pub to: String,
}

#[derive(Debug, Args)]
pub struct UnitsArgs {
    /// Only show one table
    pub table: Option<String>,
}

#[derive(Debug, Args)]
pub struct InitConfigArgs {
    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drip_args_use_form_defaults() {
        let cli = Cli::try_parse_from(["irrigation_toolbox", "drip", "--flow", "2"]).unwrap();
        let Command::Drip(args) = cli.command else {
            panic!("expected drip");
        };
        let input = DripLineInput::from(args);
        assert_eq!(input.flow, Some(2.0));
        assert_eq!(input.row_spacing, None);
        assert_eq!(
            DripLineInput {
                flow: None,
                ..input
            },
            DripLineInput::default()
        );
    }

    #[test]
    fn material_overrides_c() {
        let cli = Cli::try_parse_from([
            "irrigation_toolbox",
            "friction-loss",
            "--material",
            "15-Year-Old Steel",
        ])
        .unwrap();
        let Command::FrictionLoss(args) = cli.command else {
            panic!("expected friction-loss");
        };
        assert_eq!(args.into_input().unwrap().c, Some(100.0));
    }

    #[test]
    fn every_calculator_has_a_subcommand() {
        use crate::calculator::CalculatorKind;
        use clap::CommandFactory;

        let cmd = Cli::command();
        for kind in CalculatorKind::ALL {
            assert!(
                cmd.find_subcommand(kind.command_name()).is_some(),
                "missing subcommand {}",
                kind.command_name()
            );
        }
    }

    #[test]
    fn negative_values_parse() {
        let cli =
            Cli::try_parse_from(["irrigation_toolbox", "velocity", "--flow", "-5"]).unwrap();
        let Command::Velocity(args) = cli.command else {
            panic!("expected velocity");
        };
        assert_eq!(VelocityInput::from(args).flow, Some(-5.0));
    }
}
