use std::path::PathBuf;
use std::sync::Arc;

use clap::{Args, Parser, Subcommand};
use saltguard_core::{
    config::resolve_model_path, derive_features, score_heart_risk, CoreConfig,
    GradientBoostedModel, PatientInput, RiskService, ScoringSettings, DEFAULT_GENDER_CODE,
};

#[derive(Parser)]
#[command(name = "saltguard")]
#[command(about = "SALTGUARD clinical risk scoring CLI")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

/// The six measurements, in the order they are typed on the command line.
#[derive(Args)]
struct Measurements {
    /// Age in years
    #[arg(allow_negative_numbers = true)]
    age: f64,
    /// Serum sodium (mmol/L)
    #[arg(allow_negative_numbers = true)]
    sodium: f64,
    /// Serum creatinine (mg/dL)
    #[arg(allow_negative_numbers = true)]
    creatinine: f64,
    /// Hemoglobin (g/dL)
    #[arg(allow_negative_numbers = true)]
    hemoglobin: f64,
    /// White blood cell count (cells/uL)
    #[arg(allow_negative_numbers = true)]
    wbc: f64,
    /// Blood urea nitrogen (mg/dL)
    #[arg(allow_negative_numbers = true)]
    bun: f64,
}

impl From<Measurements> for PatientInput {
    fn from(m: Measurements) -> Self {
        PatientInput {
            age: m.age,
            sodium: m.sodium,
            creatinine: m.creatinine,
            hemoglobin: m.hemoglobin,
            wbc: m.wbc,
            bun: m.bun,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Score a patient with the mortality model and the cardiac rules
    Score {
        #[command(flatten)]
        measurements: Measurements,
        /// Model artifact (defaults to models/mortality_model.json)
        #[arg(long)]
        model: Option<PathBuf>,
        /// Value fed to the model's gender feature
        #[arg(long, default_value_t = DEFAULT_GENDER_CODE)]
        gender_code: f64,
    },
    /// List the model's feature names in the order it expects them
    Features {
        /// Model artifact (defaults to models/mortality_model.json)
        #[arg(long)]
        model: Option<PathBuf>,
    },
    /// Derive flags and the cardiac score without a model
    Rules {
        #[command(flatten)]
        measurements: Measurements,
    },
}

fn load_model(path: Option<PathBuf>) -> Result<GradientBoostedModel, Box<dyn std::error::Error>> {
    let path = resolve_model_path(path)?;
    Ok(GradientBoostedModel::load_json(path)?)
}

/// Validate the scoring settings through `CoreConfig` before loading the model.
fn build_service(
    model: Option<PathBuf>,
    gender_code: f64,
) -> Result<RiskService, Box<dyn std::error::Error>> {
    let cfg = CoreConfig::new(resolve_model_path(model)?, ScoringSettings { gender_code })?;
    let model = GradientBoostedModel::load_json(cfg.model_path())?;
    let service = RiskService::new(Arc::new(model), cfg.settings());
    service.check_schema()?;
    Ok(service)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Score {
            measurements,
            model,
            gender_code,
        }) => {
            let service = build_service(model, gender_code)?;
            let assessment = service.assess(&measurements.into())?;
            println!("{}", serde_json::to_string_pretty(&assessment)?);
        }
        Some(Commands::Features { model }) => {
            let model = load_model(model)?;
            for (i, name) in model.feature_names.iter().enumerate() {
                println!("{:>2}: {}", i, name);
            }
        }
        Some(Commands::Rules { measurements }) => {
            let input: PatientInput = measurements.into();
            let derived = derive_features(&input);
            let heart = score_heart_risk(&derived.flags, input.creatinine);
            let out = serde_json::json!({
                "bun_creatinine_ratio": derived.bun_creatinine_ratio,
                "clinical_flags": derived.flags,
                "heart_risk": heart.risk,
                "heart_risk_score": heart.score,
                "heart_risk_reasons": heart.reasons,
            });
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
        None => {
            println!("Use 'saltguard --help' for commands");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCENARIO_A: [&str; 6] = ["70", "130", "2.0", "8", "12000", "40"];

    fn parse_score(extra: &[&str]) -> (Measurements, Option<PathBuf>, f64) {
        let args = ["saltguard", "score"]
            .into_iter()
            .chain(SCENARIO_A)
            .chain(extra.iter().copied());
        match Cli::try_parse_from(args).unwrap().command {
            Some(Commands::Score {
                measurements,
                model,
                gender_code,
            }) => (measurements, model, gender_code),
            _ => panic!("expected the score command"),
        }
    }

    #[test]
    fn test_build_service_rejects_nan_gender_code() {
        let (_, model, gender_code) = parse_score(&["--gender-code", "NaN"]);
        assert!(gender_code.is_nan());
        assert!(build_service(model, gender_code).is_err());
    }

    #[test]
    fn test_build_service_rejects_infinite_gender_code() {
        assert!(build_service(None, f64::INFINITY).is_err());
    }

    #[test]
    fn test_score_defaults_match_the_rest_api() {
        let (measurements, model, gender_code) = parse_score(&[]);
        assert_eq!(gender_code, DEFAULT_GENDER_CODE);

        let service = build_service(model, gender_code).unwrap();
        let assessment = service.assess(&measurements.into()).unwrap();
        assert_eq!(assessment.mortality_probability, 71.09);
        assert_eq!(assessment.heart_risk_score, 5);
    }

    #[test]
    fn test_build_service_rejects_missing_model_override() {
        let missing = PathBuf::from("no/such/model.json");
        assert!(build_service(Some(missing), DEFAULT_GENDER_CODE).is_err());
    }

    #[test]
    fn test_rules_accepts_negative_measurements() {
        let cli = Cli::try_parse_from(["saltguard", "rules", "-3", "140", "-1.5", "13", "7000", "14"])
            .unwrap();
        match cli.command {
            Some(Commands::Rules { measurements }) => {
                let input: PatientInput = measurements.into();
                assert_eq!(input.age, -3.0);
                assert_eq!(input.creatinine, -1.5);
            }
            _ => panic!("expected the rules command"),
        }
    }
}
