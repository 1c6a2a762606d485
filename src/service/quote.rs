use rayon::prelude::*;
use std::sync::Arc;
use std::time::Duration;

use super::calculator::compute_landed_cost;
use super::rounding::canonical;
use crate::cache::{Cache, TtlCache};
use crate::error::Result;
use crate::models::{CalculatorInput, ChinaShipping, CostBreakdown, PackageDimensions, TieredSchedule};

pub type QuoteCache = dyn Cache<CalculatorInput, CostBreakdown>;

/// Quote service: memoizes breakdowns by input and prices batches in parallel
pub struct QuoteService {
    cache: Arc<QuoteCache>,
    ttl: Duration,
}

impl QuoteService {
    pub fn new(cache: Arc<QuoteCache>, ttl: Duration) -> Self {
        Self { cache, ttl }
    }

    pub fn in_memory(ttl: Duration) -> Self {
        Self::new(Arc::new(TtlCache::<CalculatorInput, CostBreakdown>::new()), ttl)
    }

    /// Single quote; failed inputs are never cached.
    /// `0.2` and `0.20` share one entry and yield the same breakdown text.
    pub fn quote(&self, input: &CalculatorInput) -> Result<CostBreakdown> {
        let input = input.normalized();
        if let Some(hit) = self.cache.get(&input) {
            tracing::debug!("Quote cache hit for {} x {}", input.quantity, input.unit_price_cny);
            return Ok(hit);
        }

        let breakdown = compute_landed_cost(&input)?;
        self.cache.put(input, breakdown.clone(), self.ttl);
        Ok(breakdown)
    }

    /// Independent quotes in input order
    pub fn quote_batch(&self, inputs: &[CalculatorInput]) -> Vec<Result<CostBreakdown>> {
        let results: Vec<_> = inputs.par_iter().map(|input| self.quote(input)).collect();

        let failed = results.iter().filter(|r| r.is_err()).count();
        tracing::info!("Batch quote: {} inputs, {} rejected", inputs.len(), failed);
        results
    }
}

impl CalculatorInput {
    /// Every decimal in canonical form, used as the cache key
    pub fn normalized(&self) -> Self {
        let china_shipping = match &self.china_shipping {
            ChinaShipping::Flat { fee_cny } => ChinaShipping::Flat { fee_cny: canonical(fee_cny) },
            ChinaShipping::Tiered(t) => ChinaShipping::Tiered(TieredSchedule {
                first_unit_threshold: canonical(&t.first_unit_threshold),
                first_unit_fee: canonical(&t.first_unit_fee),
                next_unit_size: canonical(&t.next_unit_size),
                next_unit_fee: canonical(&t.next_unit_fee),
                charge_basis: t.charge_basis,
            }),
        };

        Self {
            unit_price_cny: canonical(&self.unit_price_cny),
            exchange_rate: canonical(&self.exchange_rate),
            china_shipping,
            package: PackageDimensions::new(
                canonical(&self.package.length_cm),
                canonical(&self.package.width_cm),
                canonical(&self.package.height_cm),
                canonical(&self.package.weight_kg),
            ),
            fcl_flat_fee_krw: self.fcl_flat_fee_krw.as_ref().map(canonical),
            tariff_rate_percent: canonical(&self.tariff_rate_percent),
            origin_certificate_fee_krw: canonical(&self.origin_certificate_fee_krw),
            customs_broker_fee_krw: canonical(&self.customs_broker_fee_krw),
            ..self.clone()
        }
    }
}
