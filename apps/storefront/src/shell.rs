//! # Storefront Shell
//!
//! Line-oriented front end: one input line, one command, one screen.
//!
//! ## Line Handling
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Shell Loop                                           │
//! │                                                                         │
//! │  stdin line                                                             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  pending confirmation? ── yes ──► "s"/"sim" runs it, anything else     │
//! │       │ no                        drops it                              │
//! │       ▼                                                                 │
//! │  parse_command ── ParseError ──► "Erro: ..." (same screen)             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  dispatch ──► commands::* ── ApiError ──► "Erro [CODE]: ..." (same)    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Navigator updated, screens::render_* for the new route                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Only I/O errors on the output end the loop.

use std::collections::BTreeMap;
use std::io::{self, Write};

use padaria_core::validation::validate_search_query;
use padaria_core::{categories, Product, ProductFilter, Route, Screen};
use thiserror::Error;
use tracing::{debug, info};

use crate::commands::admin::{self, ProductForm};
use crate::commands::auth::{self, SignUpForm};
use crate::commands::cart::{self, Checkout};
use crate::commands::{contact, product};
use crate::error::ApiError;
use crate::navigation::Navigator;
use crate::screens::{self, HomeView};
use crate::state::AppState;

// =============================================================================
// Commands
// =============================================================================

/// A parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Home,
    /// Name search; empty clears it.
    Search(String),
    /// Category chip; `None` is "Todos".
    Category(Option<String>),
    Categories,
    Product(String),
    Add { id: String, quantity: Option<i64> },
    OrderDetails,
    Cart,
    ContinueShopping,
    Cancel,
    Finish,
    /// Without credentials just opens the Login screen.
    Login(Option<(String, String)>),
    /// Without fields just opens the SignUp screen.
    SignUp(Option<SignUpForm>),
    Logout,
    Profile,
    Admin,
    NewProduct(ProductForm),
    Edit(String),
    Save(ProductForm),
    Delete(String),
    Contact,
    Export,
    Back,
    Quit,
}

/// Input that does not form a command.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("comando vazio")]
    Empty,

    #[error("comando desconhecido '{0}' (digite ajuda)")]
    Unknown(String),

    #[error("{command}: falta {argument}")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },

    #[error("{command}: argumento a mais '{extra}'")]
    UnexpectedArgument { command: &'static str, extra: String },

    #[error("quantidade inválida '{0}'")]
    InvalidQuantity(String),

    #[error("aspas sem fechamento")]
    UnterminatedQuote,

    #[error("esperado campo=valor, recebido '{0}'")]
    MalformedField(String),

    #[error("{command}: campo desconhecido '{field}'")]
    UnknownField { command: &'static str, field: String },
}

/// Splits on whitespace, keeping "double quoted" runs together.
fn tokenize(line: &str) -> Result<Vec<String>, ParseError> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut has_token = false;

    for c in line.chars() {
        match c {
            '"' => {
                in_quotes = !in_quotes;
                has_token = true;
            }
            c if c.is_whitespace() && !in_quotes => {
                if has_token {
                    tokens.push(std::mem::take(&mut current));
                    has_token = false;
                }
            }
            c => {
                current.push(c);
                has_token = true;
            }
        }
    }

    if in_quotes {
        return Err(ParseError::UnterminatedQuote);
    }
    if has_token {
        tokens.push(current);
    }
    Ok(tokens)
}

/// `campo=valor` tokens, keys lowercased.
struct Fields {
    command: &'static str,
    values: BTreeMap<String, String>,
}

impl Fields {
    fn parse(command: &'static str, tokens: &[String]) -> Result<Self, ParseError> {
        let mut values = BTreeMap::new();
        for token in tokens {
            let (key, value) = token
                .split_once('=')
                .filter(|(key, _)| !key.is_empty())
                .ok_or_else(|| ParseError::MalformedField(token.clone()))?;
            values.insert(key.to_lowercase(), value.to_string());
        }
        Ok(Fields { command, values })
    }

    fn take(&mut self, key: &str) -> String {
        self.values.remove(key).unwrap_or_default()
    }

    fn finish(self) -> Result<(), ParseError> {
        match self.values.into_keys().next() {
            Some(field) => Err(ParseError::UnknownField {
                command: self.command,
                field,
            }),
            None => Ok(()),
        }
    }

    fn into_sign_up(mut self) -> Result<SignUpForm, ParseError> {
        let form = SignUpForm {
            name: self.take("nome"),
            username: self.take("usuario"),
            email: self.take("email"),
            phone: self.take("telefone"),
            password: self.take("senha"),
            confirm_password: self.take("confirmar"),
        };
        self.finish()?;
        Ok(form)
    }

    fn into_product_form(mut self) -> Result<ProductForm, ParseError> {
        let form = ProductForm {
            name: self.take("nome"),
            description: self.take("descricao"),
            price: self.take("preco"),
            discount: self.take("desconto"),
            image_url: self.take("imagem"),
            category: self.take("categoria"),
        };
        self.finish()?;
        Ok(form)
    }
}

fn one_arg(command: &'static str, argument: &'static str, args: &[String]) -> Result<String, ParseError> {
    match args {
        [] => Err(ParseError::MissingArgument { command, argument }),
        [value] => Ok(value.clone()),
        [_, extra, ..] => Err(ParseError::UnexpectedArgument {
            command,
            extra: extra.clone(),
        }),
    }
}

fn no_args(command: &'static str, args: &[String], value: Command) -> Result<Command, ParseError> {
    match args.first() {
        Some(extra) => Err(ParseError::UnexpectedArgument {
            command,
            extra: extra.clone(),
        }),
        None => Ok(value),
    }
}

/// Parses one input line.
///
/// Command words are Portuguese, with English aliases.
pub fn parse_command(line: &str) -> Result<Command, ParseError> {
    let tokens = tokenize(line)?;
    let Some((word, args)) = tokens.split_first() else {
        return Err(ParseError::Empty);
    };

    match word.to_lowercase().as_str() {
        "ajuda" | "help" | "?" => Ok(Command::Help),
        "inicio" | "home" => no_args("inicio", args, Command::Home),
        "busca" | "buscar" | "search" => Ok(Command::Search(args.join(" "))),
        "categoria" | "category" => {
            let name = args.join(" ");
            if name.is_empty() || name.eq_ignore_ascii_case("todos") {
                Ok(Command::Category(None))
            } else {
                Ok(Command::Category(Some(name)))
            }
        }
        "categorias" | "categories" => no_args("categorias", args, Command::Categories),
        "produto" | "product" => Ok(Command::Product(one_arg("produto", "id", args)?)),
        "add" | "adicionar" => match args {
            [] => Err(ParseError::MissingArgument {
                command: "add",
                argument: "id",
            }),
            [id] => Ok(Command::Add {
                id: id.clone(),
                quantity: None,
            }),
            [id, qty] => {
                let quantity = qty
                    .parse::<i64>()
                    .map_err(|_| ParseError::InvalidQuantity(qty.clone()))?;
                Ok(Command::Add {
                    id: id.clone(),
                    quantity: Some(quantity),
                })
            }
            [_, _, extra, ..] => Err(ParseError::UnexpectedArgument {
                command: "add",
                extra: extra.clone(),
            }),
        },
        "pedido" | "order" => no_args("pedido", args, Command::OrderDetails),
        "carrinho" | "cart" => no_args("carrinho", args, Command::Cart),
        "continuar" | "continue" => no_args("continuar", args, Command::ContinueShopping),
        "cancelar" | "cancel" => no_args("cancelar", args, Command::Cancel),
        "finalizar" | "finish" => no_args("finalizar", args, Command::Finish),
        "login" | "entrar" => match args {
            [] => Ok(Command::Login(None)),
            [_] => Err(ParseError::MissingArgument {
                command: "login",
                argument: "senha",
            }),
            [username, password] => Ok(Command::Login(Some((username.clone(), password.clone())))),
            [_, _, extra, ..] => Err(ParseError::UnexpectedArgument {
                command: "login",
                extra: extra.clone(),
            }),
        },
        "cadastro" | "cadastrar" | "signup" => {
            if args.is_empty() {
                Ok(Command::SignUp(None))
            } else {
                let form = Fields::parse("cadastro", args)?.into_sign_up()?;
                Ok(Command::SignUp(Some(form)))
            }
        }
        "sair" | "logout" => no_args("sair", args, Command::Logout),
        "perfil" | "profile" => no_args("perfil", args, Command::Profile),
        "admin" => no_args("admin", args, Command::Admin),
        "novo" | "new" => Ok(Command::NewProduct(
            Fields::parse("novo", args)?.into_product_form()?,
        )),
        "edit" | "editar" => Ok(Command::Edit(one_arg("edit", "id", args)?)),
        "salvar" | "save" => Ok(Command::Save(
            Fields::parse("salvar", args)?.into_product_form()?,
        )),
        "excluir" | "delete" => Ok(Command::Delete(one_arg("excluir", "id", args)?)),
        "contato" | "contact" => no_args("contato", args, Command::Contact),
        "exportar" | "export" => no_args("exportar", args, Command::Export),
        "voltar" | "back" => no_args("voltar", args, Command::Back),
        "fim" | "quit" | "exit" => Ok(Command::Quit),
        other => Err(ParseError::Unknown(other.to_string())),
    }
}

/// Whether a confirmation answer means yes.
pub fn is_yes(answer: &str) -> bool {
    matches!(
        answer.trim().to_lowercase().as_str(),
        "s" | "sim" | "y" | "yes"
    )
}

/// Whether a confirmation answer is a plain no. Blank counts as no.
pub fn is_no(answer: &str) -> bool {
    matches!(
        answer.trim().to_lowercase().as_str(),
        "" | "n" | "nao" | "não" | "no"
    )
}

// =============================================================================
// Shell
// =============================================================================

/// What the caller should do after a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// A destructive action waiting for "s/n".
#[derive(Debug, Clone, PartialEq, Eq)]
enum Pending {
    CancelOrder,
    DeleteProduct(String),
}

#[derive(Debug, Error)]
enum ShellError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Io(#[from] io::Error),
}

type ShellResult<T> = Result<T, ShellError>;

/// The interactive storefront.
#[derive(Debug)]
pub struct Shell {
    state: AppState,
    nav: Navigator,
    filter: ProductFilter,
    catalog: Option<Vec<Product>>,
    pending: Option<Pending>,
}

impl Shell {
    pub fn new(state: AppState) -> Self {
        Shell {
            state,
            nav: Navigator::new(),
            filter: ProductFilter::all(),
            catalog: None,
            pending: None,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn navigator(&self) -> &Navigator {
        &self.nav
    }

    /// Restores the session and shows Home.
    pub async fn start(&mut self, out: &mut impl Write) -> io::Result<()> {
        auth::restore_session(&self.state.store, &self.state.session).await;
        info!(store = %self.state.config.store_name, "Storefront ready");
        let result = self.render_current(out).await;
        self.report(result, out)
    }

    /// Prompt for the next line.
    pub fn prompt(&self, out: &mut impl Write) -> io::Result<()> {
        if self.pending.is_some() {
            write!(out, "[s/n] ")?;
        } else {
            write!(out, "{}> ", self.nav.current_screen().title())?;
        }
        out.flush()
    }

    /// Handles one input line.
    pub async fn handle_line(&mut self, line: &str, out: &mut impl Write) -> io::Result<Flow> {
        if let Some(pending) = self.pending.take() {
            if is_yes(line) {
                let result = self.confirm(pending, out).await;
                self.report(result, out)?;
                return Ok(Flow::Continue);
            }
            debug!(?pending, "Confirmation declined");
            writeln!(out, "  Cancelado.")?;
            if is_no(line) {
                return Ok(Flow::Continue);
            }
            // Any other answer is run as a command of its own.
        }

        if line.trim().is_empty() {
            return Ok(Flow::Continue);
        }

        let command = match parse_command(line) {
            Ok(command) => command,
            Err(e) => {
                writeln!(out, "  Erro: {}", e)?;
                return Ok(Flow::Continue);
            }
        };

        debug!(?command, screen = ?self.nav.current_screen(), "Dispatching");
        let result = self.dispatch(command, out).await;
        match result {
            Ok(flow) => Ok(flow),
            Err(ShellError::Api(err)) => {
                screens::render_error(out, &err)?;
                Ok(Flow::Continue)
            }
            Err(ShellError::Io(err)) => Err(err),
        }
    }

    fn report(&self, result: ShellResult<()>, out: &mut impl Write) -> io::Result<()> {
        match result {
            Ok(()) => Ok(()),
            Err(ShellError::Api(err)) => screens::render_error(out, &err),
            Err(ShellError::Io(err)) => Err(err),
        }
    }

    async fn dispatch(&mut self, command: Command, out: &mut impl Write) -> ShellResult<Flow> {
        match command {
            Command::Help => screens::render_help(out)?,
            Command::Quit => return Ok(Flow::Quit),

            Command::Home | Command::ContinueShopping => self.go_to(Route::Home, out).await?,
            Command::Search(query) => {
                self.filter.query = validate_search_query(&query).map_err(ApiError::from)?;
                self.go_to(Route::Home, out).await?;
            }
            Command::Category(category) => {
                self.filter.category = category;
                self.go_to(Route::Home, out).await?;
            }
            Command::Categories => {
                for category in product::list_categories(&self.state.store).await? {
                    writeln!(out, "  {}", category)?;
                }
            }
            Command::Product(id) => {
                let found = product::get_product(&self.state.store, &id).await?;
                screens::render_product(out, &self.state.config, &found)?;
            }

            Command::Add { id, quantity } => {
                let response =
                    cart::add_to_cart(&self.state.store, &self.state.cart, &id, quantity).await?;
                let added = response.items.last().map(|item| item.product.clone());
                self.go_to(Route::OrderDetails { product: added }, out)
                    .await?;
            }
            Command::OrderDetails => {
                self.go_to(Route::OrderDetails { product: None }, out)
                    .await?
            }
            Command::Cart => self.go_to(Route::Cart, out).await?,
            Command::Cancel => self.cancel(out).await?,
            Command::Finish => self.finish(out).await?,

            Command::Login(None) => self.go_to(Route::Login, out).await?,
            Command::Login(Some((username, password))) => {
                self.nav.navigate(Route::Login);
                let user =
                    auth::sign_in(&self.state.store, &self.state.session, &username, &password)
                        .await?;
                screens::render_notice(out, &format!("Bem-vindo, {}!", user.name))?;
                self.go_to(Route::Home, out).await?;
            }
            Command::SignUp(None) => {
                let previous_screen = self.nav.current_screen();
                self.go_to(Route::SignUp { previous_screen }, out).await?;
            }
            Command::SignUp(Some(form)) => {
                if self.nav.current_screen() != Screen::SignUp {
                    let previous_screen = self.nav.current_screen();
                    self.nav.navigate(Route::SignUp { previous_screen });
                }
                auth::sign_up(&self.state.store, &form).await?;
                screens::render_notice(out, "Cadastro realizado com sucesso!")?;
                self.go_to(Route::Login, out).await?;
            }
            Command::Logout => {
                auth::sign_out(&self.state.store, &self.state.session).await?;
                self.go_to(Route::Login, out).await?;
            }
            Command::Profile => {
                auth::get_profile(&self.state.session)?;
                self.go_to(Route::Profile, out).await?;
            }

            Command::Admin => {
                admin::require_admin(&self.state.session)?;
                self.catalog = None;
                self.go_to(Route::Admin, out).await?;
            }
            Command::NewProduct(form) => {
                admin::create_product(&self.state.store, &self.state.session, &form).await?;
                self.catalog = None;
                screens::render_notice(out, "Produto adicionado com sucesso!")?;
                if self.nav.current_screen() == Screen::Admin {
                    self.render_current(out).await?;
                }
            }
            Command::Edit(id) => {
                admin::require_admin(&self.state.session)?;
                let found = product::get_product(&self.state.store, &id).await?;
                self.go_to(Route::EditProduct { product: found }, out).await?;
            }
            Command::Save(form) => {
                let Route::EditProduct { product: editing } = self.nav.current().clone() else {
                    return Err(ApiError::validation("Abra um produto com edit <id>").into());
                };
                admin::update_product(&self.state.store, &self.state.session, &editing.id, &form)
                    .await?;
                self.catalog = None;
                screens::render_notice(out, "Produto atualizado com sucesso!")?;
                self.nav.go_back();
                self.render_current(out).await?;
            }
            Command::Delete(id) => {
                admin::require_admin(&self.state.session)?;
                product::get_product(&self.state.store, &id).await?;
                self.ask(
                    Pending::DeleteProduct(id),
                    "Tem certeza que deseja excluir este produto?",
                    out,
                )?;
            }

            Command::Contact => {
                screens::render_contact(out, &contact::contact_link(&self.state.config))?
            }
            Command::Export => {
                let json = product::export_catalog(&self.state.store).await?;
                writeln!(out, "{}", json)?;
            }
            Command::Back => {
                self.nav.go_back();
                self.render_current(out).await?;
            }
        }
        Ok(Flow::Continue)
    }

    async fn cancel(&mut self, out: &mut impl Write) -> ShellResult<()> {
        match self.nav.current().clone() {
            Route::SignUp { previous_screen } => {
                let route = Route::for_screen(previous_screen).unwrap_or_default();
                self.go_to(route, out).await
            }
            Route::OrderDetails { .. } if self.state.cart.line_count() > 0 => {
                self.ask(
                    Pending::CancelOrder,
                    "Tem certeza que deseja cancelar este pedido?",
                    out,
                )?;
                Ok(())
            }
            Route::OrderDetails { .. } => self.go_to(Route::Home, out).await,
            _ => {
                self.nav.go_back();
                self.render_current(out).await
            }
        }
    }

    async fn finish(&mut self, out: &mut impl Write) -> ShellResult<()> {
        match cart::finish_order(&self.state.cart, &self.state.session)? {
            Checkout::LoginRequired => {
                screens::render_notice(out, "Faça login para finalizar o pedido")?;
                self.go_to(Route::Login, out).await
            }
            Checkout::Placed(order) => {
                screens::render_order_placed(out, &self.state.config, &order)?;
                self.nav.reset();
                Ok(())
            }
        }
    }

    fn ask(&mut self, pending: Pending, question: &str, out: &mut impl Write) -> io::Result<()> {
        self.pending = Some(pending);
        screens::render_confirm(out, question)
    }

    async fn confirm(&mut self, pending: Pending, out: &mut impl Write) -> ShellResult<()> {
        match pending {
            Pending::CancelOrder => {
                cart::clear_cart(&self.state.cart);
                self.go_to(Route::Home, out).await
            }
            Pending::DeleteProduct(id) => {
                admin::delete_product(&self.state.store, &self.state.session, &id).await?;
                self.catalog = None;
                screens::render_notice(out, "Produto excluído com sucesso!")?;
                if self.nav.current_screen() == Screen::Admin {
                    self.render_current(out).await?;
                }
                Ok(())
            }
        }
    }

    async fn go_to(&mut self, route: Route, out: &mut impl Write) -> ShellResult<()> {
        self.nav.navigate(route);
        self.render_current(out).await
    }

    async fn load_catalog(&mut self, out: &mut impl Write) -> ShellResult<&[Product]> {
        if self.catalog.is_none() {
            writeln!(out, "  Carregando produtos...")?;
            let loaded = product::list_products(&self.state.store).await?;
            self.catalog = Some(loaded);
        }
        Ok(self.catalog.as_deref().unwrap_or_default())
    }

    async fn render_current(&mut self, out: &mut impl Write) -> ShellResult<()> {
        let config = self.state.config.clone();
        match self.nav.current().clone() {
            Route::Home => {
                let user = self.state.session.current_user();
                let cart_lines = self.state.cart.line_count();
                let filter = self.filter.clone();
                let catalog = self.load_catalog(out).await?;
                let chips = categories(catalog);
                let products = filter.apply(catalog);
                screens::render_home(
                    out,
                    &config,
                    &HomeView {
                        user: user.as_ref(),
                        cart_lines,
                        categories: &chips,
                        filter: &filter,
                        products: &products,
                    },
                )?;
            }
            Route::Login => screens::render_login(out)?,
            Route::SignUp { previous_screen } => screens::render_sign_up(out, previous_screen)?,
            Route::OrderDetails { product } => {
                let cart = cart::get_cart(&self.state.cart);
                screens::render_order_details(out, &config, &cart, product.as_ref())?;
            }
            Route::Cart => {
                let cart = cart::get_cart(&self.state.cart);
                screens::render_cart(out, &config, &cart)?;
            }
            Route::Profile => {
                let user = auth::get_profile(&self.state.session)?;
                let orders = self.state.session.orders_for(&user.id);
                screens::render_profile(out, &config, &user, &orders)?;
            }
            Route::Admin => {
                let catalog = self.load_catalog(out).await?;
                screens::render_admin(out, &config, catalog)?;
            }
            Route::EditProduct { product } => {
                screens::render_edit_product(out, &config, &product)?
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::ConfigState;
    use padaria_store::{Store, StoreConfig};

    fn shell() -> Shell {
        Shell::new(AppState::with_store(
            ConfigState::default(),
            Store::seeded(StoreConfig::instant()),
        ))
    }

    async fn run(shell: &mut Shell, lines: &[&str]) -> String {
        let mut out = Vec::new();
        for line in lines {
            shell.handle_line(line, &mut out).await.unwrap();
        }
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_parse_basic_commands() {
        assert_eq!(parse_command("inicio").unwrap(), Command::Home);
        assert_eq!(parse_command("  HOME ").unwrap(), Command::Home);
        assert_eq!(
            parse_command("busca pão de").unwrap(),
            Command::Search("pão de".to_string())
        );
        assert_eq!(
            parse_command("categoria Pães Especiais").unwrap(),
            Command::Category(Some("Pães Especiais".to_string()))
        );
        assert_eq!(parse_command("categoria todos").unwrap(), Command::Category(None));
        assert_eq!(
            parse_command("add 6 3").unwrap(),
            Command::Add {
                id: "6".to_string(),
                quantity: Some(3)
            }
        );
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(parse_command("   "), Err(ParseError::Empty));
        assert!(matches!(parse_command("dance"), Err(ParseError::Unknown(_))));
        assert!(matches!(
            parse_command("add 6 muitos"),
            Err(ParseError::InvalidQuantity(_))
        ));
        assert!(matches!(
            parse_command("login admin"),
            Err(ParseError::MissingArgument { argument: "senha", .. })
        ));
        assert_eq!(
            parse_command("novo nome=\"Broa"),
            Err(ParseError::UnterminatedQuote)
        );
        assert!(matches!(
            parse_command("novo sabor=milho"),
            Err(ParseError::UnknownField { .. })
        ));
        assert!(matches!(
            parse_command("novo milho"),
            Err(ParseError::MalformedField(_))
        ));
    }

    #[test]
    fn test_parse_quoted_fields() {
        let Command::NewProduct(form) =
            parse_command("novo nome=\"Broa de Milho\" descricao=\"Broa caseira\" preco=7,90")
                .unwrap()
        else {
            panic!("expected novo");
        };
        assert_eq!(form.name, "Broa de Milho");
        assert_eq!(form.description, "Broa caseira");
        assert_eq!(form.price, "7,90");
        assert!(form.category.is_empty());
    }

    #[test]
    fn test_is_yes() {
        assert!(is_yes("s"));
        assert!(is_yes(" SIM "));
        assert!(!is_yes("n"));
        assert!(!is_yes(""));

        assert!(is_no(" N "));
        assert!(is_no("não"));
        assert!(is_no(""));
        assert!(!is_no("inicio"));
    }

    #[tokio::test]
    async fn test_start_renders_home() {
        let mut shell = shell();
        let mut out = Vec::new();
        shell.start(&mut out).await.unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Joelma Padaria"));
        assert!(text.contains("Pão Francês"));
        assert!(!shell.state().session.is_signed_in());
    }

    #[tokio::test]
    async fn test_add_opens_order_details() {
        let mut shell = shell();
        let text = run(&mut shell, &["add 6"]).await;

        assert!(text.contains("Sonho adicionado ao carrinho"));
        assert!(text.contains("Total: R$ 2.98"));
        assert_eq!(shell.navigator().current_screen(), Screen::OrderDetails);
        assert_eq!(shell.state().cart.line_count(), 1);
    }

    #[tokio::test]
    async fn test_filters_home() {
        let mut shell = shell();
        let text = run(&mut shell, &["categoria Pães"]).await;
        assert!(text.contains("Pão Francês"));
        assert!(text.contains("Baguete"));
        assert!(!text.contains("Croissant"));

        let text = run(&mut shell, &["categoria", "busca BOLO"]).await;
        assert!(text.contains("Bolo de Cenoura"));
    }

    #[tokio::test]
    async fn test_command_at_confirmation_declines_then_runs() {
        let mut shell = shell();
        run(&mut shell, &["add 1", "cancelar"]).await;

        let text = run(&mut shell, &["inicio"]).await;
        assert!(text.contains("Cancelado."));
        assert!(text.contains("Pão Francês"));
        assert_eq!(shell.navigator().current_screen(), Screen::Home);
        assert_eq!(shell.state().cart.line_count(), 1);

        let text = run(&mut shell, &["pedido", "cancelar", "n"]).await;
        assert!(text.contains("Cancelado."));
        assert_eq!(shell.navigator().current_screen(), Screen::OrderDetails);
        assert_eq!(shell.state().cart.line_count(), 1);
    }

    #[tokio::test]
    async fn test_cancel_order_asks_first() {
        let mut shell = shell();
        let text = run(&mut shell, &["add 1", "cancelar"]).await;
        assert!(text.contains("Tem certeza que deseja cancelar este pedido?"));

        run(&mut shell, &["n"]).await;
        assert_eq!(shell.state().cart.line_count(), 1);
        assert_eq!(shell.navigator().current_screen(), Screen::OrderDetails);

        run(&mut shell, &["cancelar", "s"]).await;
        assert_eq!(shell.state().cart.line_count(), 0);
        assert_eq!(shell.navigator().current_screen(), Screen::Home);
    }

    #[tokio::test]
    async fn test_finish_without_login_goes_to_login() {
        let mut shell = shell();
        run(&mut shell, &["add 2", "finalizar"]).await;

        assert_eq!(shell.navigator().current_screen(), Screen::Login);
        assert_eq!(shell.state().cart.line_count(), 1);
    }

    #[tokio::test]
    async fn test_login_then_finish() {
        let mut shell = shell();
        let text = run(&mut shell, &["add 2", "login admin errada"]).await;
        assert!(text.contains("Erro [INVALID_CREDENTIALS]"));
        assert_eq!(shell.navigator().current_screen(), Screen::Login);

        run(&mut shell, &["login admin senha123"]).await;
        assert_eq!(shell.navigator().current_screen(), Screen::Home);

        let text = run(&mut shell, &["finalizar"]).await;
        assert!(text.contains("Pedido realizado"));
        assert!(text.contains("Total: R$ 15.00"));
        assert_eq!(shell.state().cart.line_count(), 0);
        assert_eq!(shell.navigator().depth(), 1);
    }

    #[tokio::test]
    async fn test_sign_up_flow() {
        let mut shell = shell();
        run(&mut shell, &["login", "cadastro"]).await;
        assert_eq!(
            shell.navigator().current(),
            &Route::SignUp {
                previous_screen: Screen::Login
            }
        );

        let text = run(
            &mut shell,
            &["cadastro nome=Joana usuario=joana email=joana@example.com telefone=123 senha=segredo confirmar=segredo"],
        )
        .await;
        assert!(text.contains("Erro [VALIDATION_ERROR]"));
        assert_eq!(shell.navigator().current_screen(), Screen::SignUp);

        let text = run(
            &mut shell,
            &["cadastro nome=Joana usuario=joana email=joana@example.com telefone=11988887777 senha=segredo confirmar=segredo"],
        )
        .await;
        assert!(text.contains("Cadastro realizado com sucesso!"));
        assert_eq!(shell.navigator().current_screen(), Screen::Login);
        assert_eq!(shell.state().store.inner().users().count().await, 2);
    }

    #[tokio::test]
    async fn test_sign_up_cancel_returns_to_previous() {
        let mut shell = shell();
        run(&mut shell, &["cadastro", "cancelar"]).await;
        assert_eq!(shell.navigator().current(), &Route::Home);
    }

    #[tokio::test]
    async fn test_admin_requires_admin() {
        let mut shell = shell();
        let text = run(&mut shell, &["admin", "excluir 1"]).await;

        assert_eq!(text.matches("Erro [FORBIDDEN]").count(), 2);
        assert_eq!(shell.navigator().current_screen(), Screen::Home);
        assert_eq!(shell.state().store.inner().products().count().await, 10);
    }

    #[tokio::test]
    async fn test_admin_delete_and_edit() {
        let mut shell = shell();
        run(&mut shell, &["login admin senha123", "admin"]).await;

        let text = run(&mut shell, &["excluir 3", "s"]).await;
        assert!(text.contains("Tem certeza que deseja excluir este produto?"));
        assert!(text.contains("Produto excluído com sucesso!"));
        assert_eq!(shell.state().store.inner().products().count().await, 9);

        let text = run(&mut shell, &["edit 6", "salvar preco=4,00 desconto=0"]).await;
        assert!(text.contains("Editar Produto"));
        assert!(text.contains("Produto atualizado com sucesso!"));
        assert_eq!(shell.navigator().current_screen(), Screen::Admin);

        let sonho = product::get_product(&shell.state().store, "6").await.unwrap();
        assert_eq!(sonho.price_cents, 400);
        assert_eq!(sonho.discount_percentage, 0);
    }

    #[tokio::test]
    async fn test_admin_add_product() {
        let mut shell = shell();
        let text = run(
            &mut shell,
            &[
                "login admin senha123",
                "admin",
                "novo nome=Broa descricao=\"Broa caseira\" preco=7.90 categoria=Pães",
            ],
        )
        .await;

        assert!(text.contains("Produto adicionado com sucesso!"));
        assert!(text.contains("Broa"));
        assert_eq!(shell.state().store.inner().products().count().await, 11);

        let text = run(&mut shell, &["novo nome=Broa"]).await;
        assert!(text.contains("Por favor, preencha todos os campos obrigatórios"));
    }

    #[tokio::test]
    async fn test_back_at_root_and_quit() {
        let mut shell = shell();
        let mut out = Vec::new();

        shell.handle_line("voltar", &mut out).await.unwrap();
        assert_eq!(shell.navigator().current(), &Route::Home);

        let flow = shell.handle_line("fim", &mut out).await.unwrap();
        assert_eq!(flow, Flow::Quit);
    }

    #[tokio::test]
    async fn test_contact_and_export() {
        let mut shell = shell();
        let text = run(&mut shell, &["contato", "exportar"]).await;

        assert!(text.contains("https://wa.me/5547999767627?text=Gostaria%20de"));
        assert!(text.contains("\"price\": 25.0"));
    }

    #[tokio::test]
    async fn test_parse_error_keeps_screen() {
        let mut shell = shell();
        let text = run(&mut shell, &["pedido", "add"]).await;

        assert!(text.contains("Erro: add: falta id"));
        assert_eq!(shell.navigator().current_screen(), Screen::OrderDetails);
    }
}
