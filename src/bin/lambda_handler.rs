//! AWS Lambda handler deriving dashboard views
//!
//! The caller has already fetched and joined its reads; the request carries the snapshot
//! and the handler returns the derived view. Malformed requests get an `error` body.

use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use log::info;
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::{json, Value};

use siminvest_engine::projection::{expected_return, project, InvestmentTerms};
use siminvest_engine::source::{AccountSnapshot, DashboardSnapshot, InvestmentSnapshot};
use siminvest_engine::view::{derive_account, derive_dashboard, derive_investment};
use siminvest_engine::PresentationConfig;

/// Input: which view to derive, from which snapshot
#[derive(Debug, Deserialize)]
#[serde(tag = "view", rename_all = "camelCase")]
enum ViewRequest {
    Dashboard {
        snapshot: DashboardSnapshot,
        #[serde(default)]
        config: PresentationConfig,
    },
    Account {
        snapshot: AccountSnapshot,
        #[serde(default)]
        config: PresentationConfig,
    },
    Investment {
        snapshot: InvestmentSnapshot,
        #[serde(default)]
        config: PresentationConfig,
    },
    #[serde(rename_all = "camelCase")]
    Simulate {
        principal: Decimal,
        annual_rate_percent: Decimal,
        duration_months: u32,
        #[serde(default)]
        monthly_contribution: Option<Decimal>,
    },
}

impl ViewRequest {
    /// Snapshots arrive straight from the caller, so they get the same checks as loaded data
    fn validate(&self) -> siminvest_engine::Result<()> {
        match self {
            ViewRequest::Dashboard { snapshot, .. } => snapshot.validate(),
            ViewRequest::Account { snapshot, .. } => snapshot.validate(),
            ViewRequest::Investment { snapshot, .. } => snapshot.validate(),
            // Checked by the simulator itself
            ViewRequest::Simulate { .. } => Ok(()),
        }
    }
}

fn error_response(message: &str) -> Value {
    json!({ "error": message })
}

fn derive(request: ViewRequest) -> Result<Value, Error> {
    if let Err(e) = request.validate() {
        return Ok(error_response(&e.to_string()));
    }

    let body = match request {
        ViewRequest::Dashboard { snapshot, config } => {
            serde_json::to_value(derive_dashboard(&snapshot, &config))?
        }
        ViewRequest::Account { snapshot, config } => {
            serde_json::to_value(derive_account(&snapshot, &config))?
        }
        ViewRequest::Investment { snapshot, config } => {
            serde_json::to_value(derive_investment(&snapshot, &config))?
        }
        ViewRequest::Simulate {
            principal,
            annual_rate_percent,
            duration_months,
            monthly_contribution,
        } => {
            let monthly = monthly_contribution.unwrap_or(Decimal::ZERO);
            let gain = match expected_return(principal, monthly, annual_rate_percent, duration_months) {
                Ok(g) => g,
                Err(e) => return Ok(error_response(&e.to_string())),
            };
            let terms = InvestmentTerms::new(
                principal,
                annual_rate_percent,
                duration_months,
                monthly_contribution,
                gain,
            );
            json!({ "expectedReturn": gain, "projection": project(&terms) })
        }
    };
    Ok(body)
}

/// Lambda handler function
async fn handler(event: LambdaEvent<Value>) -> Result<Value, Error> {
    let start = std::time::Instant::now();

    let request: ViewRequest = match serde_json::from_value(event.payload) {
        Ok(r) => r,
        Err(e) => return Ok(error_response(&format!("Invalid request: {}", e))),
    };

    let response = derive(request)?;
    info!("Derived view in {:?}", start.elapsed());
    Ok(response)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();
    run(service_fn(handler)).await
}
