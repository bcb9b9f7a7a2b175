use serde::Serialize;

use climastore_catalog::Product;
use climastore_core::{AggregateRoot, CartId, DomainError, DomainResult, Money, ProductId};

/// Cart line: one product and its accumulated quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartLine {
    product: Product,
    quantity: u32,
}

impl CartLine {
    pub fn product(&self) -> &Product {
        &self.product
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// `price * quantity` for this line.
    pub fn subtotal(&self) -> DomainResult<Money> {
        self.product.price().checked_times(self.quantity).ok_or_else(|| {
            DomainError::invariant(format!(
                "subtotal overflow for product {}",
                self.product.id_typed()
            ))
        })
    }
}

/// Aggregate root: Cart.
///
/// Lines are kept in first-added order and keyed by product id; there is at
/// most one line per product and every line has a positive quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Cart {
    id: CartId,
    lines: Vec<CartLine>,
    version: u64,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::with_id(CartId::new())
    }

    pub fn with_id(id: CartId) -> Self {
        Self {
            id,
            lines: Vec::new(),
            version: 0,
        }
    }

    pub fn id_typed(&self) -> CartId {
        self.id
    }

    /// Read-only view of the lines, in first-added order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn line(&self, product_id: ProductId) -> Option<&CartLine> {
        self.lines
            .iter()
            .find(|l| l.product.id_typed() == product_id)
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Total number of units across all lines.
    pub fn item_count(&self) -> u64 {
        self.lines.iter().map(|l| u64::from(l.quantity)).sum()
    }

    /// Add `quantity` units of `product`.
    ///
    /// An existing line for the same product id is incremented in place (its
    /// position does not change); otherwise a new line is appended. A zero
    /// quantity is rejected and leaves the cart untouched, as is an addition
    /// whose quantity or cart total would no longer be representable.
    pub fn add_item(&mut self, product: &Product, quantity: u32) -> DomainResult<()> {
        if quantity == 0 {
            return Err(DomainError::validation("quantity must be positive"));
        }

        let product_id = product.id_typed();
        let existing = self
            .lines
            .iter()
            .position(|l| l.product.id_typed() == product_id);

        let restore = match existing {
            Some(index) => {
                let line = &mut self.lines[index];
                let previous = line.quantity;
                line.quantity = previous.checked_add(quantity).ok_or_else(|| {
                    DomainError::invariant(format!("quantity overflow for product {product_id}"))
                })?;
                Some((index, previous))
            }
            None => {
                self.lines.push(CartLine {
                    product: product.clone(),
                    quantity,
                });
                None
            }
        };

        if let Err(err) = self.calculate_total_value() {
            match restore {
                Some((index, quantity)) => self.lines[index].quantity = quantity,
                None => {
                    self.lines.pop();
                }
            }
            return Err(err);
        }

        self.version += 1;
        Ok(())
    }

    /// Remove the line for `product`, if any. Unknown products are a no-op.
    pub fn remove_line(&mut self, product: &Product) {
        let product_id = product.id_typed();
        let before = self.lines.len();
        self.lines.retain(|l| l.product.id_typed() != product_id);

        if self.lines.len() != before {
            self.version += 1;
        }
    }

    /// Exact sum of `price * quantity` over all lines (zero when empty).
    pub fn calculate_total_value(&self) -> DomainResult<Money> {
        self.lines.iter().try_fold(Money::ZERO, |total, line| {
            total
                .checked_add(line.subtotal()?)
                .ok_or_else(|| DomainError::invariant("cart total overflow"))
        })
    }

    /// Remove all lines. The cart stays usable.
    pub fn clear(&mut self) {
        if self.lines.is_empty() {
            return;
        }
        self.lines.clear();
        self.version += 1;
    }
}

impl Default for Cart {
    fn default() -> Self {
        Self::new()
    }
}

impl AggregateRoot for Cart {
    type Id = CartId;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn version(&self) -> u64 {
        self.version
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use climastore_catalog::NewProduct;
    use rust_decimal::Decimal;

    fn product(id: u32, price: i64) -> Product {
        Product::new(NewProduct {
            id: ProductId::new(id).unwrap(),
            name: format!("P{id}"),
            description: String::new(),
            price: Money::from_minor(price, 0),
            category: "Air Conditioners".to_string(),
            image: None,
        })
        .unwrap()
    }

    fn ids(cart: &Cart) -> Vec<u32> {
        cart.lines()
            .iter()
            .map(|l| l.product().id_typed().get())
            .collect()
    }

    #[test]
    fn can_add_new_lines() {
        let p1 = product(1, 100);
        let p2 = product(2, 50);
        let mut cart = Cart::new();

        cart.add_item(&p1, 1).unwrap();
        cart.add_item(&p2, 1).unwrap();

        assert_eq!(cart.lines().len(), 2);
        assert_eq!(cart.lines()[0].product(), &p1);
        assert_eq!(cart.lines()[1].product(), &p2);
    }

    #[test]
    fn can_add_quantity_for_existing_lines() {
        let p1 = product(1, 100);
        let p2 = product(2, 50);
        let mut cart = Cart::new();

        cart.add_item(&p1, 1).unwrap();
        cart.add_item(&p2, 1).unwrap();
        cart.add_item(&p1, 10).unwrap();

        assert_eq!(ids(&cart), vec![1, 2]);
        assert_eq!(cart.lines()[0].quantity(), 11);
        assert_eq!(cart.lines()[1].quantity(), 1);
    }

    #[test]
    fn can_remove_line() {
        let p1 = product(1, 100);
        let p2 = product(2, 50);
        let p3 = product(3, 25);
        let mut cart = Cart::new();

        cart.add_item(&p1, 1).unwrap();
        cart.add_item(&p2, 3).unwrap();
        cart.add_item(&p3, 5).unwrap();
        cart.add_item(&p2, 1).unwrap();

        cart.remove_line(&p2);

        assert!(cart.line(p2.id_typed()).is_none());
        assert_eq!(ids(&cart), vec![1, 3]);
    }

    #[test]
    fn removing_unknown_product_is_a_no_op() {
        let p1 = product(1, 100);
        let mut cart = Cart::new();
        cart.add_item(&p1, 2).unwrap();
        let before = cart.clone();

        cart.remove_line(&product(99, 1));

        assert_eq!(cart, before);
        assert_eq!(cart.version(), before.version());
    }

    #[test]
    fn calculate_cart_total() {
        let p1 = product(1, 100);
        let p2 = product(2, 50);
        let mut cart = Cart::new();

        cart.add_item(&p1, 2).unwrap();
        cart.add_item(&p2, 1).unwrap();
        cart.add_item(&p1, 3).unwrap();

        assert_eq!(cart.calculate_total_value().unwrap(), Money::from_minor(550, 0));
    }

    #[test]
    fn empty_cart_total_is_zero() {
        assert_eq!(Cart::new().calculate_total_value().unwrap(), Money::ZERO);
    }

    #[test]
    fn fractional_prices_do_not_drift() {
        let cheap = Product::new(NewProduct {
            id: ProductId::new(1).unwrap(),
            name: "Filter".to_string(),
            description: String::new(),
            price: Money::from_minor(10, 2),
            category: "Parts".to_string(),
            image: None,
        })
        .unwrap();
        let mut cart = Cart::new();
        cart.add_item(&cheap, 3).unwrap();

        assert_eq!(cart.calculate_total_value().unwrap(), Money::from_minor(30, 2));
    }

    #[test]
    fn can_clear_contents() {
        let mut cart = Cart::new();
        cart.add_item(&product(1, 100), 1).unwrap();
        cart.add_item(&product(2, 50), 1).unwrap();

        cart.clear();

        assert!(cart.is_empty());
        assert_eq!(cart.calculate_total_value().unwrap(), Money::ZERO);

        // Still usable afterwards.
        cart.add_item(&product(3, 10), 1).unwrap();
        assert_eq!(ids(&cart), vec![3]);
    }

    #[test]
    fn zero_quantity_is_rejected_without_changes() {
        let p1 = product(1, 100);
        let mut cart = Cart::new();
        cart.add_item(&p1, 1).unwrap();
        let before = cart.clone();

        let err = cart.add_item(&p1, 0).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
        assert_eq!(cart, before);

        assert!(Cart::new().add_item(&p1, 0).is_err());
    }

    #[test]
    fn quantity_overflow_is_rejected_without_changes() {
        let p1 = product(1, 1);
        let mut cart = Cart::new();
        cart.add_item(&p1, u32::MAX).unwrap();

        let err = cart.add_item(&p1, 1).unwrap_err();
        assert!(matches!(err, DomainError::InvariantViolation(_)));
        assert_eq!(cart.lines()[0].quantity(), u32::MAX);
    }

    fn priced(id: u32, price: Decimal) -> Product {
        Product::new(NewProduct {
            id: ProductId::new(id).unwrap(),
            name: format!("P{id}"),
            description: String::new(),
            price: Money::new(price),
            category: "Air Conditioners".to_string(),
            image: None,
        })
        .unwrap()
    }

    #[test]
    fn unrepresentable_total_is_rejected_without_changes() {
        let huge = priced(1, Decimal::MAX / Decimal::TWO);
        let mut cart = Cart::new();
        cart.add_item(&huge, 1).unwrap();
        let before = cart.clone();

        let err = cart.add_item(&huge, 2).unwrap_err();
        assert!(matches!(err, DomainError::InvariantViolation(_)));
        assert_eq!(cart, before);

        let err = cart.add_item(&priced(2, Decimal::MAX), 1).unwrap_err();
        assert!(matches!(err, DomainError::InvariantViolation(_)));
        assert_eq!(cart, before);

        assert_eq!(cart.calculate_total_value().unwrap(), huge.price());
    }

    #[test]
    fn oversized_first_line_leaves_cart_empty() {
        let mut cart = Cart::new();

        let err = cart
            .add_item(&priced(1, Decimal::MAX / Decimal::TWO), 3)
            .unwrap_err();

        assert!(matches!(err, DomainError::InvariantViolation(_)));
        assert!(cart.is_empty());
        assert_eq!(cart.version(), 0);
        assert_eq!(cart.calculate_total_value().unwrap(), Money::ZERO);
    }

    #[test]
    fn stale_product_copy_merges_into_existing_line() {
        let original = product(1, 100);
        let repriced = product(1, 120);
        let mut cart = Cart::new();

        cart.add_item(&original, 1).unwrap();
        cart.add_item(&repriced, 1).unwrap();

        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.lines()[0].quantity(), 2);
    }

    #[test]
    fn version_increments_only_on_effective_changes() {
        let p1 = product(1, 100);
        let mut cart = Cart::new();
        assert_eq!(cart.version(), 0);

        cart.add_item(&p1, 1).unwrap();
        assert_eq!(cart.version(), 1);

        let _ = cart.add_item(&p1, 0);
        cart.remove_line(&product(2, 1));
        assert_eq!(cart.version(), 1);

        cart.clear();
        assert_eq!(cart.version(), 2);
        cart.clear();
        assert_eq!(cart.version(), 2);
    }

    #[test]
    fn item_count_sums_quantities() {
        let mut cart = Cart::new();
        cart.add_item(&product(1, 100), 2).unwrap();
        cart.add_item(&product(2, 50), 3).unwrap();

        assert_eq!(cart.line_count(), 2);
        assert_eq!(cart.item_count(), 5);
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;
        use std::collections::BTreeMap;

        fn additions() -> impl Strategy<Value = Vec<(u32, u32)>> {
            prop::collection::vec((1u32..8, 1u32..50), 0..40)
        }

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 500,
                ..ProptestConfig::default()
            })]

            /// Property: one line per distinct product id, quantity = sum of additions.
            #[test]
            fn one_line_per_product_with_summed_quantity(adds in additions()) {
                let mut cart = Cart::new();
                let mut expected: BTreeMap<u32, u32> = BTreeMap::new();

                for (id, qty) in &adds {
                    cart.add_item(&product(*id, 10), *qty).unwrap();
                    *expected.entry(*id).or_default() += qty;
                }

                prop_assert_eq!(cart.line_count(), expected.len());
                for line in cart.lines() {
                    let id = line.product().id_typed().get();
                    prop_assert_eq!(Some(&line.quantity()), expected.get(&id));
                }
            }

            /// Property: line order follows the first addition of each product.
            #[test]
            fn lines_keep_first_added_order(adds in additions()) {
                let mut cart = Cart::new();
                let mut first_seen: Vec<u32> = Vec::new();

                for (id, qty) in &adds {
                    cart.add_item(&product(*id, 10), *qty).unwrap();
                    if !first_seen.contains(id) {
                        first_seen.push(*id);
                    }
                }

                prop_assert_eq!(ids(&cart), first_seen);
            }

            /// Property: total equals the sum of price * quantity over additions.
            #[test]
            fn total_matches_sum_of_additions(adds in additions()) {
                let mut cart = Cart::new();
                let mut expected = Money::ZERO;

                for (id, qty) in &adds {
                    let price = i64::from(*id) * 3;
                    cart.add_item(&product(*id, price), *qty).unwrap();
                    let subtotal = Money::from_minor(price, 0).checked_times(*qty).unwrap();
                    expected = expected.checked_add(subtotal).unwrap();
                }

                prop_assert_eq!(cart.calculate_total_value().unwrap(), expected);
            }

            /// Property: removing a product absent from the cart changes nothing.
            #[test]
            fn removing_absent_product_changes_nothing(adds in additions()) {
                let mut cart = Cart::new();
                for (id, qty) in &adds {
                    cart.add_item(&product(*id, 10), *qty).unwrap();
                }
                let before = cart.clone();

                cart.remove_line(&product(100, 10));

                prop_assert_eq!(cart, before);
            }
        }
    }
}
