use std::cell::Cell;

use futures::future::{self, LocalBoxFuture};
use futures::FutureExt;
use log::info;
use serde::{Deserialize, Serialize};

use crate::error::WheelError;
use crate::storage::Purchases;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Product {
    NoAds,
    PremiumWheels,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseRequest {
    pub product: Product,
    /// Set once the parental gate has been passed.
    pub parent_verified: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseReceipt {
    pub receipt_id: String,
    pub product: Product,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdRequest {
    pub placement: String,
    /// Ads are never personalized; kept explicit so providers can't assume otherwise.
    pub personalized: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdCreative {
    pub headline: String,
    pub body: String,
}

/// App-store style purchase flow.
pub trait PurchaseGateway {
    fn purchase(&self, request: PurchaseRequest) -> LocalBoxFuture<'_, Result<PurchaseReceipt, WheelError>>;
}

/// Banner ad source. `Ok(None)` means no banner should be shown.
pub trait AdProvider {
    fn load_banner(&self, request: AdRequest) -> LocalBoxFuture<'_, Result<Option<AdCreative>, WheelError>>;
}

/// Grants every parent-verified purchase without contacting a store.
#[derive(Debug, Default)]
pub struct SimulatedPurchaseGateway {
    issued: Cell<u64>,
}

impl SimulatedPurchaseGateway {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PurchaseGateway for SimulatedPurchaseGateway {
    fn purchase(&self, request: PurchaseRequest) -> LocalBoxFuture<'_, Result<PurchaseReceipt, WheelError>> {
        if !request.parent_verified {
            return future::ready(Err(WheelError::Service(
                "Purchases require parental verification".to_string(),
            )))
            .boxed_local();
        }

        let next = self.issued.get() + 1;
        self.issued.set(next);
        info!("Simulated purchase of {:?} granted", request.product);
        future::ready(Ok(PurchaseReceipt {
            receipt_id: format!("sim-{:06}", next),
            product: request.product,
        }))
        .boxed_local()
    }
}

/// Placeholder ad source until a real network is wired in.
#[derive(Debug, Clone)]
pub struct StubAdProvider {
    purchases: Purchases,
}

impl StubAdProvider {
    pub fn new(purchases: Purchases) -> Self {
        Self { purchases }
    }
}

impl AdProvider for StubAdProvider {
    fn load_banner(&self, request: AdRequest) -> LocalBoxFuture<'_, Result<Option<AdCreative>, WheelError>> {
        if self.purchases.no_ads {
            return future::ready(Ok(None)).boxed_local();
        }
        if request.personalized {
            return future::ready(Err(WheelError::Service(
                "Personalized ads are not allowed".to_string(),
            )))
            .boxed_local();
        }
        future::ready(Ok(Some(AdCreative {
            headline: "Spin & Learn Premium".to_string(),
            body: format!("Remove ads from the {} screen with one purchase.", request.placement),
        })))
        .boxed_local()
    }
}

pub fn apply_receipt(purchases: &mut Purchases, receipt: &PurchaseReceipt) {
    match receipt.product {
        Product::NoAds => purchases.no_ads = true,
        Product::PremiumWheels => purchases.premium_wheels = true,
    }
}
