//! Interactive storefront session.

use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Password, Select};
use galaxy_auth::{AuthMode, LoginForm, SignupForm};
use galaxy_commerce::prelude::*;
use galaxy_storefront::{Storefront, StorefrontError, View};

use crate::context::Context;
use crate::output::Output;

const HELP: &[(&str, &str)] = &[
    ("list", "show the current listing"),
    ("search [TEXT]", "search product names (no text clears)"),
    ("category [NAME]", "filter by category, or pick one"),
    ("brand [NAME]", "filter by brand, or pick one"),
    ("price [BRACKET]", "all, lt20, 20-40 or gt40"),
    ("sort [ORDER]", "featured, price-asc, price-desc or name-asc"),
    ("reset", "clear filters and search"),
    ("open ID", "show a product's detail page"),
    ("quick ID", "quick view a product"),
    ("back", "return to the listing"),
    ("add [ID]", "add to cart (the open product when no id)"),
    ("qty ID N", "set a quantity (0 removes)"),
    ("rm ID", "remove from cart"),
    ("cart", "show the cart"),
    ("checkout", "place a simulated order"),
    ("login", "sign in"),
    ("signup", "create an account"),
    ("logout", "sign out"),
    ("new-product", "add a product to the catalog"),
    ("help", "show this help"),
    ("quit", "leave the shell"),
];

enum Flow {
    Continue,
    Quit,
}

/// Run the shell command.
pub fn run(ctx: &Context) -> Result<()> {
    let mut store = ctx.storefront()?;
    let theme = ColorfulTheme::default();
    let out = &ctx.output;

    out.header(&format!("Welcome to {}", store.config().name));
    out.info("Type `help` for commands.");
    out.listing(&store.listing());

    loop {
        let line: String = Input::with_theme(&theme)
            .with_prompt(prompt(&store))
            .allow_empty(true)
            .interact_text()?;

        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let (command, rest) = line.split_once(' ').unwrap_or((line, ""));

        match execute(&mut store, command, rest.trim(), &theme, out) {
            Ok(Flow::Continue) => {}
            Ok(Flow::Quit) => break,
            Err(e) => out.warn(&format!("{:#}", e)),
        }
    }

    Ok(())
}

fn prompt(store: &Storefront) -> String {
    let who = store
        .identity()
        .map(|i| i.display_name().to_string())
        .unwrap_or_else(|| "guest".to_string());
    format!("{} [cart: {}]", who, store.item_count())
}

fn execute(
    store: &mut Storefront,
    command: &str,
    rest: &str,
    theme: &ColorfulTheme,
    out: &Output,
) -> Result<Flow> {
    match command {
        "list" | "ls" => out.listing(&store.listing()),
        "search" => {
            store.set_search(rest);
            out.listing(&store.listing());
        }
        "category" => {
            let value = match rest {
                "" => pick(theme, "Category", &store.category_facet().options())?,
                value => value.to_string(),
            };
            store.set_category(value);
            out.listing(&store.listing());
        }
        "brand" => {
            let value = match rest {
                "" => pick(theme, "Brand", &store.brand_facet().options())?,
                value => value.to_string(),
            };
            store.set_brand(value);
            out.listing(&store.listing());
        }
        "price" => {
            let bracket = match rest {
                "" => {
                    let names: Vec<&str> =
                        PriceBracket::VARIANTS.iter().map(|b| b.display_name()).collect();
                    PriceBracket::VARIANTS[select(theme, "Price", &names)?]
                }
                value => value.parse()?,
            };
            store.set_price(bracket);
            out.listing(&store.listing());
        }
        "sort" => {
            let order = match rest {
                "" => {
                    let names: Vec<&str> =
                        SortOrder::VARIANTS.iter().map(|s| s.display_name()).collect();
                    SortOrder::VARIANTS[select(theme, "Sort by", &names)?]
                }
                value => value.parse()?,
            };
            store.set_sort(order);
            out.listing(&store.listing());
        }
        "reset" => {
            store.reset_filters();
            out.listing(&store.listing());
        }
        "open" => {
            let product = store.select_product(rest.parse()?)?;
            out.product(product);
        }
        "quick" => quick_view(store, rest.parse()?, theme, out)?,
        "back" | "home" => {
            store.go_home();
            out.listing(&store.listing());
        }
        "add" => {
            let id = match (rest, store.view()) {
                ("", View::Detail(id)) => id,
                ("", View::Listing) => {
                    out.warn("Usage: add ID (or open a product first)");
                    return Ok(Flow::Continue);
                }
                (id, _) => id.parse()?,
            };
            let quantity = store.add_to_cart(id)?;
            out.success(&format!("Added product {} (quantity {})", id, quantity));
            if store.panels().cart {
                out.cart(&store.cart_summary());
            }
        }
        "qty" => {
            let Some((id, quantity)) = rest.split_once(' ') else {
                out.warn("Usage: qty ID N");
                return Ok(Flow::Continue);
            };
            let id: ProductId = id.parse()?;
            if !store.update_quantity(id, quantity.trim().parse()?) {
                out.warn(&format!("Product {} is not in the cart or already has that quantity", id));
            }
            out.cart(&store.cart_summary());
        }
        "rm" => {
            let id: ProductId = rest.parse()?;
            if !store.remove_from_cart(id) {
                out.warn(&format!("Product {} is not in the cart", id));
            }
            out.cart(&store.cart_summary());
        }
        "cart" => {
            store.open_cart();
            out.cart(&store.cart_summary());
        }
        "checkout" => checkout(store, theme, out)?,
        "login" => login(store, theme, out)?,
        "signup" => signup(store, theme, out)?,
        "logout" => {
            if store.is_logged_in() {
                store.logout();
                out.success("Signed out");
            } else {
                out.info("Not signed in");
            }
        }
        "new-product" => new_product(store, theme, out)?,
        "help" | "?" => {
            for (usage, description) in HELP {
                out.kv(usage, description);
            }
        }
        "quit" | "exit" | "q" => return Ok(Flow::Quit),
        other => out.warn(&format!("Unknown command '{}'; type `help`", other)),
    }
    Ok(Flow::Continue)
}

fn pick(theme: &ColorfulTheme, prompt: &str, options: &[&str]) -> Result<String> {
    let index = select(theme, prompt, options)?;
    Ok(options[index].to_string())
}

fn select(theme: &ColorfulTheme, prompt: &str, options: &[&str]) -> Result<usize> {
    Ok(Select::with_theme(theme)
        .with_prompt(prompt)
        .items(options)
        .default(0)
        .interact()?)
}

fn quick_view(
    store: &mut Storefront,
    id: ProductId,
    theme: &ColorfulTheme,
    out: &Output,
) -> Result<()> {
    let product = store.open_quick_view(id)?;
    out.kv(&product.name, &crate::output::price(&product.price));

    let add = Confirm::with_theme(theme)
        .with_prompt("Add to cart?")
        .default(false)
        .interact()?;
    if add {
        if let Some(quantity) = store.add_from_quick_view() {
            out.success(&format!("Added product {} (quantity {})", id, quantity));
        }
    } else {
        store.close_quick_view();
    }
    Ok(())
}

fn checkout(store: &mut Storefront, theme: &ColorfulTheme, out: &Output) -> Result<()> {
    let summary = store.cart_summary();
    if summary.is_empty() {
        out.info("Your cart is empty.");
        return Ok(());
    }
    out.cart(&summary);

    let confirmed = Confirm::with_theme(theme)
        .with_prompt(format!("Place order for {}?", summary.total_display()))
        .default(true)
        .interact()?;
    if confirmed {
        if let Some(receipt) = store.checkout() {
            out.receipt(&receipt);
        }
    }
    Ok(())
}

fn login(store: &mut Storefront, theme: &ColorfulTheme, out: &Output) -> Result<()> {
    store.open_auth(AuthMode::Login);
    let email: String = Input::with_theme(theme)
        .with_prompt("Email")
        .allow_empty(true)
        .interact_text()?;
    let password = Password::with_theme(theme)
        .with_prompt("Password")
        .allow_empty_password(true)
        .interact()?;

    let result = store
        .login(&LoginForm::new(email, password))
        .map(|i| i.email().to_string());
    report_auth(result, store, out);
    Ok(())
}

fn signup(store: &mut Storefront, theme: &ColorfulTheme, out: &Output) -> Result<()> {
    store.open_auth(AuthMode::Signup);
    let email: String = Input::with_theme(theme)
        .with_prompt("Email")
        .allow_empty(true)
        .interact_text()?;
    let password = Password::with_theme(theme)
        .with_prompt("Password")
        .allow_empty_password(true)
        .interact()?;
    let confirm = Password::with_theme(theme)
        .with_prompt("Confirm password")
        .allow_empty_password(true)
        .interact()?;

    let form = SignupForm::new(email, password, confirm);
    let result = store.signup(&form).map(|i| i.email().to_string());
    report_auth(result, store, out);
    Ok(())
}

fn report_auth(
    result: Result<String, StorefrontError>,
    store: &mut Storefront,
    out: &Output,
) {
    match result {
        Ok(email) => out.success(&format!("Signed in as {}", email)),
        Err(e) => {
            out.warn(&e.to_string());
            store.close_auth();
        }
    }
}

/// Answers collected by the add-product prompts.
#[derive(Debug, Default)]
struct ProductForm {
    name: String,
    brand: String,
    category: String,
    price: i64,
    image_url: String,
    description: String,
    specs: ProductSpecs,
}

impl ProductForm {
    fn into_draft(self, currency: Currency) -> ProductDraft {
        ProductDraft::new(
            self.name,
            self.brand,
            Money::new(self.price, currency),
            self.category,
            self.image_url,
        )
        .with_description(self.description)
        .with_specs(self.specs)
    }
}

/// Blank answers leave the spec unlisted.
fn spec(value: String) -> String {
    value.trim().to_string()
}

fn new_product(store: &mut Storefront, theme: &ColorfulTheme, out: &Output) -> Result<()> {
    store.open_add_product();
    let currency = store.catalog().currency();
    let text = |prompt: &str| -> Result<String> {
        Ok(Input::<String>::with_theme(theme)
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()?)
    };

    let mut form = ProductForm {
        name: text("Name")?,
        brand: text("Brand")?,
        category: text("Category")?,
        price: Input::with_theme(theme)
            .with_prompt(format!("Price ({})", currency.code()))
            .interact_text()?,
        image_url: text("Image URL")?,
        description: text("Description")?,
        ..Default::default()
    };

    let add_specs = Confirm::with_theme(theme)
        .with_prompt("Add specifications?")
        .default(false)
        .interact()?;
    if add_specs {
        form.specs = ProductSpecs {
            cpu: spec(text("CPU")?),
            ram: spec(text("RAM")?),
            storage: spec(text("Storage")?),
            display: spec(text("Display")?),
            gpu: spec(text("GPU")?),
        };
    }

    match store.submit_product(form.into_draft(currency)) {
        Ok(product) => out.success(&format!("Added {} with id {}", product.name, product.id)),
        Err(e) => {
            out.warn(&e.to_string());
            store.close_add_product();
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_form_carries_specs() {
        let form = ProductForm {
            name: "Zenbook 14".into(),
            brand: "ASUS".into(),
            category: "Laptop".into(),
            price: 24_990_000,
            image_url: "/zenbook.jpg".into(),
            specs: ProductSpecs {
                cpu: spec("Core Ultra 7".into()),
                ram: spec(" 16GB ".into()),
                gpu: spec("  ".into()),
                ..Default::default()
            },
            ..Default::default()
        };

        let draft = form.into_draft(Currency::VND);
        assert_eq!(draft.price, Money::vnd(24_990_000));
        assert_eq!(draft.specs.entries(), vec![("CPU", "Core Ultra 7"), ("RAM", "16GB")]);
        assert!(draft.validate().is_ok());
    }
}
