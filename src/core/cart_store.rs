use crate::core::{
    Cart, ConfigProvider, KeyValueStore, Locale, NoticeKind, Notifier, ProductCatalog, ProductId,
    StockOracle, UpdateProductAmount,
};
use crate::utils::error::{CartError, Result};
use std::sync::RwLock;
use tokio::sync::Mutex;

pub const CART_STORAGE_KEY: &str = "@RocketShoes:cart";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreSettings {
    pub storage_key: String,
    pub locale: Locale,
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self {
            storage_key: CART_STORAGE_KEY.to_string(),
            locale: Locale::default(),
        }
    }
}

impl StoreSettings {
    pub fn from_config<C: ConfigProvider + ?Sized>(config: &C) -> Self {
        Self {
            storage_key: config.storage_key().to_string(),
            locale: config.locale(),
        }
    }
}

/// What a mutation ended up doing. Rejections have already been reported
/// to the notifier by the time this is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Applied,
    Skipped,
    Rejected(NoticeKind),
}

enum Decision {
    Replace(Cart),
    Reject(NoticeKind),
}

/// Cart state plus the collaborators it validates and persists through.
///
/// Mutations hold a single writer lock from the snapshot read until the
/// new cart is committed, so overlapping calls run one after the other and
/// each sees the result of the previous one. Snapshot reads never wait on
/// a pending mutation.
pub struct CartStore<O, C, S, N>
where
    O: StockOracle,
    C: ProductCatalog,
    S: KeyValueStore,
    N: Notifier,
{
    stock: O,
    catalog: C,
    storage: S,
    notifier: N,
    settings: StoreSettings,
    cart: RwLock<Cart>,
    writer: Mutex<()>,
}

impl<O, C, S, N> CartStore<O, C, S, N>
where
    O: StockOracle,
    C: ProductCatalog,
    S: KeyValueStore,
    N: Notifier,
{
    /// Builds the store from whatever is persisted under the configured key.
    /// An unreadable value starts an empty cart; a failing store is an error.
    pub async fn load(
        stock: O,
        catalog: C,
        storage: S,
        notifier: N,
        settings: StoreSettings,
    ) -> Result<Self> {
        let cart = match storage.get_item(&settings.storage_key).await? {
            Some(raw) if !raw.is_empty() => Cart::from_json(&raw).unwrap_or_else(|e| {
                tracing::warn!(
                    "Ignoring unreadable cart stored under {}: {}",
                    settings.storage_key,
                    e
                );
                Cart::new()
            }),
            _ => Cart::new(),
        };

        tracing::debug!("Loaded cart with {} lines", cart.len());

        Ok(Self {
            stock,
            catalog,
            storage,
            notifier,
            settings,
            cart: RwLock::new(cart),
            writer: Mutex::new(()),
        })
    }

    pub fn cart(&self) -> Cart {
        self.cart
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    pub async fn add_product(&self, product_id: ProductId) -> Outcome {
        let _writer = self.writer.lock().await;
        let snapshot = self.cart();

        let decision = self.decide_add(&snapshot, product_id).await;
        self.settle(decision, NoticeKind::AddFailed).await
    }

    pub async fn remove_product(&self, product_id: ProductId) -> Outcome {
        let _writer = self.writer.lock().await;
        let snapshot = self.cart();

        let decision = if snapshot.find(product_id).is_some() {
            Decision::Replace(snapshot.without(product_id))
        } else {
            Decision::Reject(NoticeKind::RemoveFailed)
        };
        self.settle(Ok(decision), NoticeKind::RemoveFailed).await
    }

    /// Sets a line to exactly `amount`. Zero or negative amounts are ignored;
    /// removing a line is `remove_product`'s job.
    pub async fn update_product_amount(&self, request: UpdateProductAmount) -> Outcome {
        if request.amount <= 0 {
            tracing::debug!(
                "Ignoring non-positive amount {} for product {}",
                request.amount,
                request.product_id
            );
            return Outcome::Skipped;
        }

        let _writer = self.writer.lock().await;
        let snapshot = self.cart();

        let decision = self.decide_update(&snapshot, request).await;
        self.settle(decision, NoticeKind::UpdateFailed).await
    }

    async fn decide_add(&self, cart: &Cart, product_id: ProductId) -> Result<Decision> {
        if let Some(existing) = cart.find(product_id) {
            let stock = self.stock.stock(product_id).await?;
            tracing::debug!(
                "Product {}: {} in cart, {} in stock",
                product_id,
                existing.amount,
                stock.amount
            );

            if stock.amount <= existing.amount {
                return Ok(Decision::Reject(NoticeKind::OutOfStock));
            }
            return Ok(Decision::Replace(
                cart.with_amount(product_id, existing.amount + 1),
            ));
        }

        let mut product = self.catalog.product(product_id).await?;
        if product.id != product_id {
            return Err(CartError::ProductMismatch {
                requested: product_id,
                received: product.id,
            });
        }
        product.amount = 1;

        Ok(Decision::Replace(cart.with_product(product)?))
    }

    async fn decide_update(&self, cart: &Cart, request: UpdateProductAmount) -> Result<Decision> {
        let stock = self.stock.stock(request.product_id).await?;
        if stock.amount < request.amount {
            return Ok(Decision::Reject(NoticeKind::OutOfStock));
        }

        if cart.find(request.product_id).is_none() {
            return Ok(Decision::Reject(NoticeKind::UpdateFailed));
        }

        Ok(Decision::Replace(
            cart.with_amount(request.product_id, request.amount),
        ))
    }

    async fn settle(&self, decision: Result<Decision>, failure: NoticeKind) -> Outcome {
        let next = match decision {
            Ok(Decision::Replace(next)) => next,
            Ok(Decision::Reject(kind)) => return self.reject(kind),
            Err(e) => {
                tracing::warn!("Cart operation failed: {}", e);
                return self.reject(failure);
            }
        };

        if let Err(e) = self.persist(&next).await {
            tracing::warn!("Could not persist cart: {}", e);
            return self.reject(failure);
        }

        tracing::info!(
            "Cart updated: {} lines, {} units",
            next.len(),
            next.total_amount()
        );
        *self
            .cart
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = next;
        Outcome::Applied
    }

    async fn persist(&self, cart: &Cart) -> Result<()> {
        let json = cart.to_json()?;
        self.storage
            .set_item(&self.settings.storage_key, &json)
            .await
    }

    fn reject(&self, kind: NoticeKind) -> Outcome {
        tracing::debug!("Rejected: {:?}", kind);
        self.notifier.notify(kind, kind.message(self.settings.locale));
        Outcome::Rejected(kind)
    }
}
