use shared::domain::{Address, OrderLine, Product, ProductId};

#[derive(Debug, Clone, PartialEq)]
pub struct CartLine {
    pub product_id: ProductId,
    pub name: String,
    pub unit_price_cents: i64,
    pub quantity: u32,
}

/// In-memory cart handed to views as an injected capability, never reached
/// for as ambient global state.
#[derive(Debug, Default)]
pub struct Cart {
    lines: Vec<CartLine>,
    address: Option<Address>,
}

impl Cart {
    pub fn add(&mut self, product: &Product) {
        if let Some(line) = self
            .lines
            .iter_mut()
            .find(|line| line.product_id == product.id)
        {
            line.quantity += 1;
        } else {
            self.lines.push(CartLine {
                product_id: product.id,
                name: product.name.clone(),
                unit_price_cents: product.price_cents,
                quantity: 1,
            });
        }
    }

    /// Quantity zero removes the line.
    pub fn set_quantity(&mut self, product_id: ProductId, quantity: u32) {
        if quantity == 0 {
            self.lines.retain(|line| line.product_id != product_id);
            return;
        }
        if let Some(line) = self
            .lines
            .iter_mut()
            .find(|line| line.product_id == product_id)
        {
            line.quantity = quantity;
        }
    }

    pub fn remove(&mut self, product_id: ProductId) {
        self.lines.retain(|line| line.product_id != product_id);
    }

    /// Empties the lines; a saved delivery address survives for the next
    /// order.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn total_quantity(&self) -> u32 {
        self.lines.iter().map(|line| line.quantity).sum()
    }

    pub fn subtotal_cents(&self) -> i64 {
        self.lines
            .iter()
            .map(|line| line.unit_price_cents * i64::from(line.quantity))
            .sum()
    }

    pub fn set_address(&mut self, address: Address) {
        self.address = Some(address);
    }

    pub fn address(&self) -> Option<&Address> {
        self.address.as_ref()
    }

    pub fn order_lines(&self) -> Vec<OrderLine> {
        self.lines
            .iter()
            .map(|line| OrderLine {
                product_id: line.product_id,
                name: line.name.clone(),
                quantity: line.quantity,
                unit_price_cents: line.unit_price_cents,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use shared::domain::Benefit;

    fn product(id: i64, price_cents: i64) -> Product {
        Product {
            id: ProductId(id),
            name: format!("Product {id}"),
            category: "Oils".to_string(),
            description: String::new(),
            price_cents,
            image_ref: String::new(),
            benefits: vec![Benefit {
                title: "Benefit".to_string(),
                description: String::new(),
            }],
            review_count: 0,
            updated_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        }
    }

    fn address() -> Address {
        Address {
            email: "user@example.com".to_string(),
            phone: "+92300 1234567".to_string(),
            name: "Test User".to_string(),
            address: "1 Main St".to_string(),
            city: "Lahore".to_string(),
            postal_code: "54000".to_string(),
            state: "Punjab".to_string(),
            country: "Pakistan".to_string(),
        }
    }

    #[test]
    fn adding_the_same_product_increments_its_line() {
        let mut cart = Cart::default();
        let spirulina = product(1, 2499);
        cart.add(&spirulina);
        cart.add(&spirulina);
        cart.add(&product(2, 1850));

        assert_eq!(cart.lines().len(), 2);
        assert_eq!(cart.lines()[0].quantity, 2);
        assert_eq!(cart.total_quantity(), 3);
        assert_eq!(cart.subtotal_cents(), 2 * 2499 + 1850);
    }

    #[test]
    fn quantity_zero_removes_the_line() {
        let mut cart = Cart::default();
        cart.add(&product(1, 2499));
        cart.set_quantity(ProductId(1), 4);
        assert_eq!(cart.total_quantity(), 4);

        cart.set_quantity(ProductId(1), 0);
        assert!(cart.is_empty());
    }

    #[test]
    fn clear_keeps_the_saved_address() {
        let mut cart = Cart::default();
        cart.add(&product(1, 2499));
        cart.set_address(address());

        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.address(), Some(&address()));
    }

    #[test]
    fn order_lines_mirror_the_cart() {
        let mut cart = Cart::default();
        cart.add(&product(1, 2499));
        cart.set_quantity(ProductId(1), 3);

        let lines = cart.order_lines();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].quantity, 3);
        assert_eq!(lines[0].unit_price_cents, 2499);
    }
}
