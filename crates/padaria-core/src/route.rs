//! # Navigation Routes
//!
//! Every screen the storefront can show, with its typed payload.
//!
//! ```text
//! ┌──────────────┬───────────────────────────────────────────────┐
//! │ Route        │ Payload                                       │
//! ├──────────────┼───────────────────────────────────────────────┤
//! │ Home         │ -                                             │
//! │ Login        │ -                                             │
//! │ SignUp       │ previous_screen (where "cancel" returns)      │
//! │ OrderDetails │ product that was just added, if any           │
//! │ Profile      │ -                                             │
//! │ Admin        │ -                                             │
//! │ EditProduct  │ product being edited                          │
//! │ Cart         │ -                                             │
//! └──────────────┴───────────────────────────────────────────────┘
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::types::Product;

/// Payload-free screen discriminant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Screen {
    Home,
    Login,
    SignUp,
    OrderDetails,
    Profile,
    Admin,
    EditProduct,
    Cart,
}

impl Screen {
    /// Screen title shown in the header.
    pub fn title(&self) -> &'static str {
        match self {
            Screen::Home => "Produtos",
            Screen::Login => "Entrar",
            Screen::SignUp => "Cadastro",
            Screen::OrderDetails => "Seu Pedido",
            Screen::Profile => "Perfil",
            Screen::Admin => "Administração",
            Screen::EditProduct => "Editar Produto",
            Screen::Cart => "Carrinho",
        }
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// A navigation target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "screen", rename_all = "camelCase")]
#[ts(export)]
pub enum Route {
    Home,
    Login,
    #[serde(rename_all = "camelCase")]
    SignUp {
        previous_screen: Screen,
    },
    OrderDetails {
        product: Option<Product>,
    },
    Profile,
    Admin,
    EditProduct {
        product: Product,
    },
    Cart,
}

impl Route {
    /// The screen this route shows.
    pub fn screen(&self) -> Screen {
        match self {
            Route::Home => Screen::Home,
            Route::Login => Screen::Login,
            Route::SignUp { .. } => Screen::SignUp,
            Route::OrderDetails { .. } => Screen::OrderDetails,
            Route::Profile => Screen::Profile,
            Route::Admin => Screen::Admin,
            Route::EditProduct { .. } => Screen::EditProduct,
            Route::Cart => Screen::Cart,
        }
    }

    /// Builds the payload-free route for a screen.
    ///
    /// Returns `None` for screens that need a payload.
    pub fn for_screen(screen: Screen) -> Option<Route> {
        match screen {
            Screen::Home => Some(Route::Home),
            Screen::Login => Some(Route::Login),
            Screen::Profile => Some(Route::Profile),
            Screen::Admin => Some(Route::Admin),
            Screen::Cart => Some(Route::Cart),
            Screen::OrderDetails => Some(Route::OrderDetails { product: None }),
            Screen::SignUp | Screen::EditProduct => None,
        }
    }
}

impl Default for Route {
    fn default() -> Self {
        Route::Home
    }
}
