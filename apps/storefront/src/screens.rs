//! # Screens
//!
//! Text rendering of every storefront screen.
//!
//! Renderers are pure: they take the data to show and write it to any
//! `io::Write`. The shell decides what to fetch and where to go next.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  ☰  Joelma Padaria                               Admin   🛒 (2)        │
//! │  Buscar produtos...: bolo                                              │
//! │  [Todos] Pães  Bolos  Pães Especiais  Salgados  Doces                   │
//! │                                                                         │
//! │  #2  Bolo de Chocolate                           R$ 25.00   40% OFF     │
//! │      Bolo de chocolate com cobertura de brigadeiro                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::io::{self, Write};

use padaria_core::{CartItem, Order, OrderStatus, Product, ProductFilter, Screen, User};

use crate::commands::cart::CartResponse;
use crate::error::ApiError;
use crate::state::ConfigState;

const RULE: &str = "──────────────────────────────────────────────────────────";

/// Everything the Home screen shows.
#[derive(Debug, Clone, Copy)]
pub struct HomeView<'a> {
    pub user: Option<&'a User>,
    pub cart_lines: usize,
    pub categories: &'a [String],
    pub filter: &'a ProductFilter,
    pub products: &'a [Product],
}

fn header(out: &mut impl Write, title: &str) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", RULE)?;
    writeln!(out, "  {}", title)?;
    writeln!(out, "{}", RULE)
}

fn product_line(out: &mut impl Write, config: &ConfigState, product: &Product) -> io::Result<()> {
    let price = config.format_currency(product.price_cents);
    if product.has_discount() {
        writeln!(
            out,
            "  #{:<4} {:<28} {:>10}   {}% OFF",
            product.id, product.name, price, product.discount_percentage
        )?;
    } else {
        writeln!(out, "  #{:<4} {:<28} {:>10}", product.id, product.name, price)?;
    }
    writeln!(out, "         {}", product.description)
}

fn cart_line(out: &mut impl Write, config: &ConfigState, item: &CartItem) -> io::Result<()> {
    writeln!(
        out,
        "  {:<32} Quantidade: {:<4} {:>10}",
        item.product.name,
        item.quantity,
        config.format_currency(item.line_total().cents())
    )
}

fn status_label(status: OrderStatus) -> &'static str {
    match status {
        OrderStatus::Pending => "Pendente",
        OrderStatus::Completed => "Concluído",
        OrderStatus::Cancelled => "Cancelado",
    }
}

/// Home: header, search, category chips, filtered products.
pub fn render_home(out: &mut impl Write, config: &ConfigState, view: &HomeView<'_>) -> io::Result<()> {
    let user = view.user.map(|u| u.name.as_str()).unwrap_or("");
    writeln!(out)?;
    writeln!(out, "{}", RULE)?;
    writeln!(
        out,
        "  ☰  {:<36} {:>8}   🛒 ({})",
        config.store_name, user, view.cart_lines
    )?;
    writeln!(out, "{}", RULE)?;

    if view.filter.query.is_empty() {
        writeln!(out, "  Buscar produtos...")?;
    } else {
        writeln!(out, "  Buscar produtos...: {}", view.filter.query)?;
    }

    let chip = |label: &str, selected: bool| {
        if selected {
            format!("[{}]", label)
        } else {
            label.to_string()
        }
    };
    let mut chips = vec![chip("Todos", view.filter.category.is_none())];
    chips.extend(
        view.categories
            .iter()
            .map(|c| chip(c.as_str(), view.filter.category.as_deref() == Some(c.as_str()))),
    );
    writeln!(out, "  {}", chips.join("  "))?;
    writeln!(out)?;

    if view.products.is_empty() {
        writeln!(out, "  Nenhum produto encontrado")?;
    }
    for product in view.products {
        product_line(out, config, product)?;
    }

    writeln!(out)?;
    let is_admin = view.user.is_some_and(|u| u.is_admin);
    if is_admin {
        writeln!(out, "  add <id> [qtd] · edit <id> · admin · pedido · sair")?;
    } else if view.user.is_some() {
        writeln!(out, "  add <id> [qtd] · pedido · perfil · sair")?;
    } else {
        writeln!(out, "  add <id> [qtd] · pedido · login · cadastro")?;
    }
    writeln!(out, "  Carrinho ({} itens) · 💬 contato", view.cart_lines)
}

/// "Seu Pedido": cart lines, total, actions.
pub fn render_order_details(
    out: &mut impl Write,
    config: &ConfigState,
    cart: &CartResponse,
    added: Option<&Product>,
) -> io::Result<()> {
    header(out, Screen::OrderDetails.title())?;

    if let Some(product) = added {
        writeln!(out, "  {} adicionado ao carrinho", product.name)?;
        writeln!(out)?;
    }

    if cart.items.is_empty() {
        writeln!(out, "  Seu carrinho está vazio")?;
        writeln!(out)?;
        return writeln!(out, "  continuar: Continuar Comprando");
    }

    for item in &cart.items {
        cart_line(out, config, item)?;
    }
    writeln!(out, "{}", RULE)?;
    writeln!(
        out,
        "  Total: {}",
        config.format_currency(cart.totals.total_cents)
    )?;
    writeln!(out)?;
    writeln!(
        out,
        "  continuar: Continuar Comprando · cancelar: Cancelar Pedido · finalizar: Finalizar Pedido"
    )
}

/// Confirmation of a placed order.
pub fn render_order_placed(
    out: &mut impl Write,
    config: &ConfigState,
    order: &Order,
) -> io::Result<()> {
    header(out, "Pedido realizado")?;
    writeln!(out, "  Pedido {}", order.id)?;
    writeln!(out, "  Status: {}", status_label(order.status))?;
    for item in &order.items {
        cart_line(out, config, item)?;
    }
    writeln!(out, "  Total: {}", config.format_currency(order.total.cents()))
}

/// Bare "Carrinho" screen.
pub fn render_cart(out: &mut impl Write, config: &ConfigState, cart: &CartResponse) -> io::Result<()> {
    header(out, Screen::Cart.title())?;
    for item in &cart.items {
        cart_line(out, config, item)?;
    }
    writeln!(
        out,
        "  {} itens · {}",
        cart.totals.line_count,
        config.format_currency(cart.totals.total_cents)
    )
}

pub fn render_login(out: &mut impl Write) -> io::Result<()> {
    header(out, Screen::Login.title())?;
    writeln!(out, "  login <usuário> <senha>")?;
    writeln!(out, "  cadastro: Cadastrar · voltar: Voltar")
}

pub fn render_sign_up(out: &mut impl Write, previous: Screen) -> io::Result<()> {
    header(out, Screen::SignUp.title())?;
    writeln!(
        out,
        "  cadastro nome=\"Nome completo\" usuario=... email=... telefone=... senha=... confirmar=..."
    )?;
    writeln!(out, "  cancelar: volta para {}", previous.title())
}

/// Profile: the signed-in user and their orders.
pub fn render_profile(
    out: &mut impl Write,
    config: &ConfigState,
    user: &User,
    orders: &[Order],
) -> io::Result<()> {
    header(out, Screen::Profile.title())?;
    writeln!(out, "  Nome:     {}", user.name)?;
    writeln!(out, "  Email:    {}", user.email)?;
    writeln!(out, "  Telefone: {}", user.phone)?;
    writeln!(out, "  Usuário:  {}", user.username)?;

    if !orders.is_empty() {
        writeln!(out)?;
        writeln!(out, "  Pedidos")?;
        for order in orders {
            writeln!(
                out,
                "  {}  {}  {}  {}",
                order.created_at.format("%d/%m/%Y %H:%M"),
                status_label(order.status),
                order.line_count(),
                config.format_currency(order.total.cents())
            )?;
        }
    }
    writeln!(out)?;
    writeln!(out, "  sair: Sair")
}

/// Admin: the full catalog with management actions.
pub fn render_admin(out: &mut impl Write, config: &ConfigState, products: &[Product]) -> io::Result<()> {
    header(out, "Administração de Produtos")?;
    for product in products {
        writeln!(
            out,
            "  #{:<38} {:<28} {:>10}",
            product.id,
            product.name,
            config.format_currency(product.price_cents)
        )?;
    }
    writeln!(out)?;
    writeln!(
        out,
        "  novo nome=... descricao=... preco=... [desconto=...] [imagem=...] [categoria=...]"
    )?;
    writeln!(out, "  edit <id> · excluir <id>")
}

/// Edit form pre-filled with the product.
pub fn render_edit_product(
    out: &mut impl Write,
    config: &ConfigState,
    product: &Product,
) -> io::Result<()> {
    header(out, Screen::EditProduct.title())?;
    writeln!(out, "  Nome:      {}", product.name)?;
    writeln!(out, "  Descrição: {}", product.description)?;
    writeln!(out, "  Preço:     {}", config.format_currency(product.price_cents))?;
    writeln!(out, "  Desconto:  {}%", product.discount_percentage)?;
    writeln!(out, "  Categoria: {}", product.category)?;
    writeln!(out)?;
    writeln!(
        out,
        "  salvar [nome=...] [descricao=...] [preco=...] [desconto=...] · voltar: ← Voltar"
    )
}

/// One product card with its discounted price.
pub fn render_product(out: &mut impl Write, config: &ConfigState, product: &Product) -> io::Result<()> {
    header(out, &product.name)?;
    writeln!(out, "  {}", product.description)?;
    writeln!(out, "  Categoria: {}", product.category)?;
    writeln!(out, "  Preço:     {}", config.format_currency(product.price_cents))?;
    if product.has_discount() {
        writeln!(
            out,
            "  Com {}% OFF: {}",
            product.discount_percentage,
            config.format_currency(product.discounted_price().cents())
        )?;
    }
    writeln!(out, "  Validade:  {}", product.expiration_date.format("%d/%m/%Y"))?;
    writeln!(out)?;
    writeln!(out, "  add {}: Adicionar ao Carrinho", product.id)
}

pub fn render_contact(out: &mut impl Write, link: &str) -> io::Result<()> {
    writeln!(out, "  💬 {}", link)
}

/// One-line success alert.
pub fn render_notice(out: &mut impl Write, message: &str) -> io::Result<()> {
    writeln!(out, "  ✔ {}", message)
}

/// Inline error alert. The screen stays where it was.
pub fn render_error(out: &mut impl Write, err: &ApiError) -> io::Result<()> {
    writeln!(out, "  Erro [{}]: {}", err.code.as_str(), err.message)
}

pub fn render_confirm(out: &mut impl Write, question: &str) -> io::Result<()> {
    write!(out, "  {} (s/n) ", question)?;
    out.flush()
}

pub fn render_help(out: &mut impl Write) -> io::Result<()> {
    header(out, "Comandos")?;
    for line in [
        "inicio                      Home",
        "busca <texto>               Filtrar por nome",
        "categoria [nome]            Filtrar por categoria (sem nome: Todos)",
        "categorias                  Listar categorias",
        "produto <id>                Detalhes do produto",
        "add <id> [qtd]              Adicionar ao Carrinho",
        "pedido                      Seu Pedido",
        "carrinho                    Carrinho",
        "cancelar                    Cancelar Pedido",
        "finalizar                   Finalizar Pedido",
        "login <usuário> <senha>     Entrar",
        "cadastro [campo=valor...]   Cadastrar",
        "sair                        Sair",
        "perfil                      Perfil",
        "admin                       Administração",
        "novo campo=valor...         Adicionar produto",
        "edit <id>                   Editar Produto",
        "salvar campo=valor...       Salvar edição",
        "excluir <id>                Excluir produto",
        "contato                     Fale conosco",
        "exportar                    Catálogo em JSON",
        "voltar                      Voltar",
        "fim                         Encerrar",
    ] {
        writeln!(out, "  {}", line)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use padaria_core::Cart;
    use padaria_store::seed;

    fn render(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    fn product(id: &str) -> Product {
        seed::sample_catalog()
            .into_iter()
            .find(|p| p.id == id)
            .unwrap()
    }

    #[test]
    fn test_home_shows_chips_and_badges() {
        let config = ConfigState::default();
        let catalog = seed::sample_catalog();
        let categories = padaria_core::categories(&catalog);
        let filter = ProductFilter::category("Bolos");
        let products = filter.apply(&catalog);

        let text = render(|out| {
            render_home(
                out,
                &config,
                &HomeView {
                    user: None,
                    cart_lines: 2,
                    categories: &categories,
                    filter: &filter,
                    products: &products,
                },
            )
        });

        assert!(text.contains("Joelma Padaria"));
        assert!(text.contains("Todos  Pães  [Bolos]"));
        assert!(text.contains("Bolo de Chocolate"));
        assert!(text.contains("40% OFF"));
        assert!(text.contains("R$ 25.00"));
        assert!(text.contains("Carrinho (2 itens)"));
        assert!(!text.contains("Croissant"));
        assert!(!text.contains("edit <id>"));
    }

    #[test]
    fn test_home_admin_hint() {
        let config = ConfigState::default();
        let admin = seed::admin_user();
        let text = render(|out| {
            render_home(
                out,
                &config,
                &HomeView {
                    user: Some(&admin),
                    cart_lines: 0,
                    categories: &[],
                    filter: &ProductFilter::all(),
                    products: &[],
                },
            )
        });

        assert!(text.contains("Admin"));
        assert!(text.contains("edit <id>"));
        assert!(text.contains("Nenhum produto encontrado"));
    }

    #[test]
    fn test_order_details_empty() {
        let config = ConfigState::default();
        let cart = CartResponse::from(&Cart::new());
        let text = render(|out| render_order_details(out, &config, &cart, None));

        assert!(text.contains("Seu Pedido"));
        assert!(text.contains("Seu carrinho está vazio"));
        assert!(!text.contains("Total:"));
    }

    #[test]
    fn test_order_details_lines_and_total() {
        let config = ConfigState::default();
        let mut cart = Cart::new();
        cart.add(&product("6")).unwrap();
        cart.add_with_quantity(&product("2"), 2).unwrap();
        let response = CartResponse::from(&cart);

        let text = render(|out| render_order_details(out, &config, &response, Some(&product("2"))));

        assert!(text.contains("Bolo de Chocolate adicionado ao carrinho"));
        assert!(text.contains("Quantidade: 2"));
        assert!(text.contains("R$ 2.98"));
        assert!(text.contains("Total: R$ 32.98"));
        assert!(text.contains("Finalizar Pedido"));
    }

    #[test]
    fn test_profile_lists_orders() {
        let config = ConfigState::default();
        let admin = seed::admin_user();
        let mut cart = Cart::new();
        cart.add(&product("1")).unwrap();
        let order = Order::from_cart("o-1", &admin.id, &cart, chrono::Utc::now()).unwrap();

        let text = render(|out| render_profile(out, &config, &admin, &[order]));
        assert!(text.contains("admin@example.com"));
        assert!(text.contains("11999999999"));
        assert!(text.contains("Pendente"));
        assert!(text.contains("R$ 0.35"));
    }

    #[test]
    fn test_product_card() {
        let config = ConfigState::default();
        let text = render(|out| render_product(out, &config, &product("6")));

        assert!(text.contains("Sonho"));
        assert!(text.contains("Preço:     R$ 3.50"));
        assert!(text.contains("Com 15% OFF: R$ 2.98"));
        assert!(text.contains("add 6"));
    }

    #[test]
    fn test_error_line() {
        let text = render(|out| render_error(out, &ApiError::forbidden("Sem acesso")));
        assert_eq!(text.trim(), "Erro [FORBIDDEN]: Sem acesso");
    }
}
