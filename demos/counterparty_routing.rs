use std::any::Any;
use std::sync::Arc;

use calc_param_lib::{
    param_eq, CalculationParameter, CalculationTarget, CounterpartyRoutingConfig, GenericTrade,
    Measure, ParameterRegistry, QueryType, StandardId, TradeInfo,
};

/// Query type: which discounting curve group a trade is valued with
struct DiscountingCurves;

#[derive(Debug, PartialEq)]
struct CurveGroup {
    name: &'static str,
}

impl CalculationParameter for CurveGroup {
    fn query_type(&self) -> QueryType {
        QueryType::of::<DiscountingCurves>()
    }

    fn filter(&self, _: &dyn CalculationTarget, _: &Measure) -> Option<&dyn CalculationParameter> {
        Some(self)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn dyn_eq(&self, other: &dyn CalculationParameter) -> bool {
        param_eq(self, other)
    }
}

#[derive(Debug)]
struct Bond;

impl CalculationTarget for Bond {}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new("calc_param_lib=trace"))
        .init();

    let registry = ParameterRegistry::new()
        .register("ois", Arc::new(CurveGroup { name: "USD-OIS" }))
        .register("csa-eur", Arc::new(CurveGroup { name: "EUR-ESTR-CSA" }));

    let config = CounterpartyRoutingConfig::from_toml(
        r#"
        default = "ois"
        [counterparties]
        "CPTY~BANK_A" = "csa-eur"
        "#,
    )?;
    let selector = config.build(&registry)?;

    println!("Counterparty Routing Example\n");
    println!("Selector: {selector}\n");

    let targets: Vec<(&str, Box<dyn CalculationTarget>)> = vec![
        (
            "swap with BANK_A",
            Box::new(GenericTrade::new(
                TradeInfo::builder()
                    .counterparty(StandardId::parse("CPTY~BANK_A")?)
                    .build(),
                "swap",
            )),
        ),
        (
            "swap with BANK_Z",
            Box::new(GenericTrade::new(
                TradeInfo::builder()
                    .counterparty(StandardId::parse("CPTY~BANK_Z")?)
                    .build(),
                "swap",
            )),
        ),
        ("swap without counterparty", Box::new(GenericTrade::new(TradeInfo::empty(), "swap"))),
        ("bond position", Box::new(Bond)),
    ];

    for (label, target) in &targets {
        let chosen = selector
            .filter(target.as_ref(), &Measure::PRESENT_VALUE)
            .and_then(|p| p.as_any().downcast_ref::<CurveGroup>())
            .map(|group| group.name)
            .unwrap_or("<none>");
        println!("  {label:<28} -> {chosen}");
    }

    Ok(())
}
