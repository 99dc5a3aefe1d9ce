//! # Session State
//!
//! The signed-in user and the orders placed during this run.
//!
//! The auth service never remembers anyone, so the session is the only
//! place the current user lives. Signing out clears it.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use padaria_core::{Order, User};

#[derive(Debug, Default)]
struct Session {
    user: Option<User>,
    orders: Vec<Order>,
}

/// Shared session state.
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    inner: Arc<Mutex<Session>>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Session> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// The signed-in user, if any.
    pub fn current_user(&self) -> Option<User> {
        self.lock().user.clone()
    }

    pub fn is_signed_in(&self) -> bool {
        self.lock().user.is_some()
    }

    pub fn set_user(&self, user: User) {
        self.lock().user = Some(user);
    }

    /// Forgets the signed-in user. Orders are kept.
    pub fn clear_user(&self) {
        self.lock().user = None;
    }

    pub fn record_order(&self, order: Order) {
        self.lock().orders.push(order);
    }

    /// Orders placed by `user_id`, oldest first.
    pub fn orders_for(&self, user_id: &str) -> Vec<Order> {
        self.lock()
            .orders
            .iter()
            .filter(|o| o.user_id == user_id)
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use padaria_core::{Cart, Product};

    fn user(is_admin: bool) -> User {
        User {
            id: "1".to_string(),
            name: "Admin".to_string(),
            phone: "11999999999".to_string(),
            email: "admin@example.com".to_string(),
            username: "admin".to_string(),
            is_admin,
        }
    }

    #[test]
    fn test_sign_in_and_out() {
        let session = SessionState::new();
        assert!(!session.is_signed_in());

        session.set_user(user(true));
        assert!(session.is_signed_in());
        assert!(session.current_user().is_some_and(|u| u.is_admin));

        session.clear_user();
        assert!(session.current_user().is_none());
    }

    #[test]
    fn test_orders_survive_sign_out() {
        let session = SessionState::new();
        let mut cart = Cart::new();
        cart.add(&Product {
            id: "9".to_string(),
            name: "Coxinha".to_string(),
            description: String::new(),
            price_cents: 350,
            expiration_date: chrono::NaiveDate::from_ymd_opt(2024, 3, 23).unwrap(),
            discount_percentage: 30,
            image_url: String::new(),
            category: "Salgados".to_string(),
            quantity: 40,
        })
        .unwrap();
        let order = Order::from_cart("o-1", "1", &cart, Utc::now()).unwrap();

        session.set_user(user(false));
        session.record_order(order);
        session.clear_user();

        assert_eq!(session.orders_for("1").len(), 1);
        assert!(session.orders_for("2").is_empty());
    }
}
