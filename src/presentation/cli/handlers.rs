//! Command handlers
//!
//! Each handler builds the screen model a web client would mount for the
//! same task, drives it, and prints the result.

use std::io::{self, Write};
use std::time::Duration;

use anyhow::{anyhow, bail, Result};
use serde::Serialize;
use tokio::time::interval;

use super::render;
use super::{
    CarouselCommands, CatalogArgs, CatalogCommands, Cli, Commands, ImageCommands, ListArgs,
    ProductCommands, ProductFields, ServiceCommands, ServiceFields, SlideCommands, SlideFields,
};
use crate::application::dto::{ContactForm, EntityForm, ProductForm, ServiceForm, SlideForm};
use crate::application::services::slide_admin::DELETE_CONFIRMATION;
use crate::application::services::{
    redirect_if_authenticated, AuthService, CatalogResource, CatalogScreen, ContactOutcome,
    GateStatus, PublicCatalog, WritePolicy,
};
use crate::domain::services::{category_label, CatalogEntity, PriceRange, SortKey};
use crate::domain::{quick_message, Identified, QUICK_MESSAGES};
use crate::infrastructure::http::{Products, Resource, Searchable, Services, Slides};
use crate::infrastructure::metrics::gather_metrics;
use crate::infrastructure::navigation::LOGIN_ROUTE;
use crate::shared::error::GENERIC_FAILURE_MESSAGE;
use crate::startup::Application;

pub async fn dispatch(app: &Application, cli: Cli) -> Result<()> {
    let result = match cli.command {
        Commands::Login { email, password } => login(app, &email, &password).await,
        Commands::Logout => {
            app.auth_service().logout().await;
            println!("Sesión cerrada.");
            Ok(())
        }
        Commands::Whoami => whoami(app).await,
        Commands::Services { command } => services(app, command).await,
        Commands::Products { command } => products(app, command).await,
        Commands::Slides { command } => slides(app, command).await,
        Commands::Carousel { command } => carousel(app, command).await,
        Commands::Catalog { command } => catalog(app, command).await,
        Commands::Upload { path } => upload(app, &path).await,
        Commands::Images { command } => images(app, command).await,
        Commands::Contact {
            name,
            phone,
            message,
        } => contact(app, &name, &phone, message.as_deref().unwrap_or_default()).await,
        Commands::Whatsapp { quick, message } => whatsapp(app, quick.as_deref(), message.as_deref()),
    };

    if app.navigator().visited(LOGIN_ROUTE) {
        eprintln!("Inicia sesión con `reset-admin login`.");
    }
    if cli.metrics {
        println!();
        print!("{}", gather_metrics());
    }
    result
}

// =============================================================================
// Session
// =============================================================================

/// Admin commands run behind the auth gate.
fn require_session(app: &Application) -> Result<()> {
    let mut gate = app.auth_gate();
    match gate.after_first_render() {
        GateStatus::Allowed => Ok(()),
        _ => bail!("No hay sesión activa."),
    }
}

async fn login(app: &Application, email: &str, password: &str) -> Result<()> {
    if redirect_if_authenticated(app.session().as_ref(), app.navigator().as_ref()) {
        println!("Ya hay una sesión activa. Usa `reset-admin logout` para cambiar de usuario.");
        return Ok(());
    }

    let session = app
        .auth_service()
        .login(email, password)
        .await
        .map_err(|e| anyhow!(e.user_message()))?;

    match session.user {
        Some(user) => println!("Bienvenido, {} ({})", user.name, user.email),
        None => println!("Sesión iniciada."),
    }
    Ok(())
}

async fn whoami(app: &Application) -> Result<()> {
    require_session(app)?;
    let user = app
        .auth_service()
        .current_user()
        .await
        .map_err(|e| anyhow!(e.user_message()))?;

    println!("{} <{}>", user.name, user.email);
    if !user.role.is_empty() {
        println!("Rol: {}", user.role);
    }
    Ok(())
}

// =============================================================================
// Services and products
// =============================================================================

async fn services(app: &Application, command: ServiceCommands) -> Result<()> {
    require_session(app)?;
    let screen = app.services_screen().with_policy(WritePolicy::Merge);

    match command {
        ServiceCommands::List(args) => list_catalog(screen, &args, false).await,
        ServiceCommands::Show { id } => show::<Services>(app, &id).await,
        ServiceCommands::Create(fields) => {
            create(screen, |form| apply_service_fields(form, &fields)).await
        }
        ServiceCommands::Update { id, fields } => {
            update(screen, &id, |form| apply_service_fields(form, &fields)).await
        }
        ServiceCommands::Delete { id, yes } => delete(screen, &id, yes).await,
        ServiceCommands::Toggle { id } => toggle(screen, &id).await,
        ServiceCommands::Categories => categories::<Services>(app).await,
        ServiceCommands::Search { query } => search::<Services>(app, &query).await,
    }
}

async fn products(app: &Application, command: ProductCommands) -> Result<()> {
    require_session(app)?;
    let screen = app.products_screen().with_policy(WritePolicy::Merge);

    match command {
        ProductCommands::List(args) => list_catalog(screen, &args, true).await,
        ProductCommands::Show { id } => show::<Products>(app, &id).await,
        ProductCommands::Create(fields) => {
            create(screen, |form| apply_product_fields(form, &fields)).await
        }
        ProductCommands::Update { id, fields } => {
            update(screen, &id, |form| apply_product_fields(form, &fields)).await
        }
        ProductCommands::Delete { id, yes } => delete(screen, &id, yes).await,
        ProductCommands::Toggle { id } => toggle(screen, &id).await,
        ProductCommands::Categories => categories::<Products>(app).await,
        ProductCommands::Search { query } => search::<Products>(app, &query).await,
    }
}

fn apply_service_fields(form: &mut ServiceForm, fields: &ServiceFields) {
    if let Some(name) = &fields.name {
        form.name = name.clone();
    }
    if let Some(description) = &fields.description {
        form.description = description.clone();
    }
    if let Some(price) = fields.price {
        form.price = price;
    }
    if let Some(category) = &fields.category {
        form.category = category.clone();
    }
    if let Some(icon) = &fields.icon {
        form.icon = icon.clone();
    }
    if let Some(duration) = fields.duration {
        form.estimated_duration = duration;
    }
    if let Some(active) = fields.active {
        form.is_active = active;
    }
    for feature in &fields.features {
        form.features.add(feature);
    }
    for feature in &fields.remove_features {
        form.features.remove(feature);
    }
}

fn apply_product_fields(form: &mut ProductForm, fields: &ProductFields) {
    if let Some(name) = &fields.name {
        form.name = name.clone();
    }
    if let Some(description) = &fields.description {
        form.description = description.clone();
    }
    if let Some(price) = fields.price {
        form.price = price;
    }
    if let Some(category) = &fields.category {
        form.category = category.clone();
    }
    if let Some(icon) = &fields.icon {
        form.icon = icon.clone();
    }
    if let Some(image) = &fields.image {
        form.image = image.clone();
    }
    if let Some(stock) = fields.stock {
        form.stock = stock;
    }
    if let Some(active) = fields.active {
        form.is_active = active;
    }
    for feature in &fields.features {
        form.features.add(feature);
    }
    for feature in &fields.remove_features {
        form.features.remove(feature);
    }
}

async fn list_catalog<R, F>(mut screen: CatalogScreen<R, F>, args: &ListArgs, with_stock: bool) -> Result<()>
where
    R: CatalogResource,
    R::Entity: CatalogEntity + Identified + Clone + Send + Sync + 'static,
    F: EntityForm<R>,
{
    let sort: SortKey = args.sort.parse().map_err(|e: String| anyhow!(e))?;
    screen.mount().await;
    screen.set_search(&args.search);
    screen.set_sort(sort);

    if let Some(error) = screen.list_state().error {
        eprintln!("{} (mostrando datos de respaldo)", error);
    }
    render::catalog_rows(&screen.rows());
    render::catalog_stats(&screen.stats(), with_stock);
    Ok(())
}

async fn show<R>(app: &Application, id: &str) -> Result<()>
where
    R: Resource,
    R::Entity: Serialize,
{
    let entity = app.client().get_one::<R>(id).await?;
    println!("{}", serde_json::to_string_pretty(&entity)?);
    Ok(())
}

async fn create<R, F>(mut screen: CatalogScreen<R, F>, fill: impl FnOnce(&mut F)) -> Result<()>
where
    R: CatalogResource,
    R::Entity: CatalogEntity + Identified + Clone + Send + Sync + 'static,
    F: EntityForm<R>,
{
    screen.open_create();
    screen.edit_form(fill);

    match screen.submit().await {
        Some(entity) => {
            println!("Creado: {} ({})", entity.name(), entity.id());
            Ok(())
        }
        None => bail!(form_failure(screen.form_error())),
    }
}

async fn update<R, F>(mut screen: CatalogScreen<R, F>, id: &str, fill: impl FnOnce(&mut F)) -> Result<()>
where
    R: CatalogResource,
    R::Entity: CatalogEntity + Identified + Clone + Send + Sync + 'static,
    F: EntityForm<R>,
{
    screen.mount().await;
    if !screen.open_edit(id) {
        bail!("No existe un {} con id {}", R::NOUN, id);
    }
    screen.edit_form(fill);

    match screen.submit().await {
        Some(entity) => {
            println!("Actualizado: {} ({})", entity.name(), entity.id());
            Ok(())
        }
        None => bail!(form_failure(screen.form_error())),
    }
}

async fn delete<R, F>(mut screen: CatalogScreen<R, F>, id: &str, yes: bool) -> Result<()>
where
    R: CatalogResource,
    R::Entity: CatalogEntity + Identified + Clone + Send + Sync + 'static,
    F: EntityForm<R>,
{
    screen.request_delete(id);
    let prompt = format!("¿Estás seguro de que quieres eliminar este {}?", R::NOUN);
    if !confirm(&prompt, yes)? {
        screen.cancel_delete();
        println!("Cancelado.");
        return Ok(());
    }

    if screen.confirm_delete().await {
        println!("Eliminado.");
        Ok(())
    } else {
        bail!(form_failure(screen.mutation_state().error.as_deref()))
    }
}

async fn toggle<R, F>(screen: CatalogScreen<R, F>, id: &str) -> Result<()>
where
    R: CatalogResource,
    R::Entity: CatalogEntity + Identified + Clone + Send + Sync + 'static,
    F: EntityForm<R>,
{
    screen.mount().await;
    if screen.store().find(id).is_none() {
        bail!("No existe un {} con id {}", R::NOUN, id);
    }

    match screen.toggle_active(id).await {
        Some(entity) => {
            render::active_flag(entity.name(), entity.is_active());
            Ok(())
        }
        None => bail!(form_failure(screen.mutation_state().error.as_deref())),
    }
}

async fn categories<R: Searchable>(app: &Application) -> Result<()> {
    for key in app.client().categories::<R>().await? {
        println!("{:<16} {}", key, category_label(&key));
    }
    Ok(())
}

async fn search<R>(app: &Application, query: &str) -> Result<()>
where
    R: Searchable,
    R::Entity: CatalogEntity,
{
    let items = app.client().search::<R>(query).await?;
    render::public_listing(&items);
    Ok(())
}

// =============================================================================
// Slides and carousel
// =============================================================================

async fn slides(app: &Application, command: SlideCommands) -> Result<()> {
    require_session(app)?;
    let mut admin = app.slide_admin();

    match command {
        SlideCommands::List => {
            admin.mount().await;
            if let Some(error) = admin.list_state().error {
                eprintln!("{}", error);
            }
            render::slide_rows(&admin.rows());
        }
        SlideCommands::Show { id } => return show::<Slides>(app, &id).await,
        SlideCommands::Create(fields) => {
            admin.mount().await;
            admin.open_create();
            admin.edit_form(|form| apply_slide_fields(form, &fields));
            match admin.submit().await {
                Some(slide) => println!("Slide creado: {} ({})", slide.title, slide.id),
                None => bail!(form_failure(admin.form_error())),
            }
        }
        SlideCommands::Update { id, fields } => {
            admin.mount().await;
            if !admin.open_edit(&id) {
                bail!("No existe un slide con id {}", id);
            }
            admin.edit_form(|form| apply_slide_fields(form, &fields));
            match admin.submit().await {
                Some(slide) => println!("Slide actualizado: {} ({})", slide.title, slide.id),
                None => bail!(form_failure(admin.form_error())),
            }
        }
        SlideCommands::Delete { id, yes } => {
            admin.request_delete(&id);
            if !confirm(DELETE_CONFIRMATION, yes)? {
                admin.cancel_delete();
                println!("Cancelado.");
                return Ok(());
            }
            admin.mount().await;
            if !admin.confirm_delete().await {
                bail!(form_failure(admin.mutation_state().error.as_deref()));
            }
            println!("Slide eliminado.");
        }
        SlideCommands::Toggle { id } => {
            admin.mount().await;
            match admin.toggle(&id).await {
                Some(slide) => render::active_flag(&slide.title, slide.is_active),
                None => bail!(form_failure(admin.mutation_state().error.as_deref())),
            }
        }
        SlideCommands::Move { id, direction } => {
            admin.mount().await;
            if !admin.move_slide(&id, direction.into()).await {
                match admin.mutation_state().error {
                    Some(error) => bail!(error),
                    None => bail!("No se puede mover el slide en esa dirección"),
                }
            }
            render::slide_rows(&admin.rows());
        }
    }
    Ok(())
}

fn apply_slide_fields(form: &mut SlideForm, fields: &SlideFields) {
    if let Some(title) = &fields.title {
        form.title = title.clone();
    }
    if let Some(description) = &fields.description {
        form.description = description.clone();
    }
    if let Some(image_url) = &fields.image_url {
        form.image_url = image_url.clone();
    }
    if let Some(text) = &fields.button_text {
        form.button_text = text.clone();
    }
    if let Some(link) = &fields.button_link {
        form.button_link = link.clone();
    }
    if let Some(show) = fields.show_button {
        form.show_button = show;
    }
    if let Some(active) = fields.active {
        form.is_active = active;
    }
}

async fn carousel(app: &Application, command: CarouselCommands) -> Result<()> {
    let engine = app.carousel_engine();
    engine.mount().await;

    match command {
        CarouselCommands::Show => render::carousel_views(&engine.views()),
        CarouselCommands::Watch { seconds } => {
            let stop = async move {
                match seconds {
                    Some(secs) => tokio::time::sleep(Duration::from_secs(secs)).await,
                    None => {
                        if let Err(e) = tokio::signal::ctrl_c().await {
                            tracing::error!(error = %e, "Failed to listen for Ctrl-C");
                        }
                    }
                }
            };
            tokio::pin!(stop);

            let mut poll = interval(Duration::from_millis(200));
            let mut shown: Option<(usize, usize)> = None;

            loop {
                tokio::select! {
                    _ = &mut stop => break,
                    _ = poll.tick() => {
                        let views = engine.views();
                        let Some(index) = engine.active_index() else { continue };
                        if shown == Some((index, views.len())) {
                            continue;
                        }
                        if let Some(view) = views.get(index) {
                            render::active_slide(index, views.len(), view);
                            shown = Some((index, views.len()));
                        }
                    }
                }
            }
        }
    }

    engine.unmount();
    Ok(())
}

async fn catalog(app: &Application, command: CatalogCommands) -> Result<()> {
    match command {
        CatalogCommands::Services(args) => public_listing(app.public_services(), &args).await,
        CatalogCommands::Products(args) => public_listing(app.public_products(), &args).await,
    }
}

async fn public_listing<T>(mut catalog: PublicCatalog<T>, args: &CatalogArgs) -> Result<()>
where
    T: CatalogEntity + Identified + Clone + Send + Sync + 'static,
{
    let sort: SortKey = args.sort.parse().map_err(|e: String| anyhow!(e))?;
    let range: PriceRange = args.price.parse().map_err(|e: String| anyhow!(e))?;

    catalog.mount().await;
    catalog.set_search(&args.search);
    catalog.set_category(&args.category);
    catalog.set_price_range(range);
    catalog.set_sort(sort);

    if let Some(error) = catalog.error() {
        eprintln!("{} (mostrando datos de respaldo)", error);
    }
    render::public_listing(&catalog.visible());
    catalog.unmount();
    Ok(())
}

// =============================================================================
// Uploads
// =============================================================================

async fn upload(app: &Application, path: &std::path::Path) -> Result<()> {
    require_session(app)?;
    let media = app.media_service();

    match media.upload_path(path).await {
        Ok(image) => {
            println!("Imagen subida: {}", image.url);
            Ok(())
        }
        Err(e) => {
            let message = media.state().error.unwrap_or_else(|| e.user_message());
            bail!(message)
        }
    }
}

async fn images(app: &Application, command: ImageCommands) -> Result<()> {
    require_session(app)?;
    let media = app.media_service();

    match command {
        ImageCommands::List => render::images(&media.list_images().await?),
        ImageCommands::Delete { filename, yes } => {
            let prompt = format!("¿Eliminar la imagen {}?", filename);
            if !confirm(&prompt, yes)? {
                println!("Cancelado.");
                return Ok(());
            }
            let response = media.delete_image(&filename).await?;
            if response.message.is_empty() {
                println!("Imagen eliminada.");
            } else {
                println!("{}", response.message);
            }
        }
    }
    Ok(())
}

// =============================================================================
// Contact
// =============================================================================

async fn contact(app: &Application, name: &str, phone: &str, message: &str) -> Result<()> {
    let form = ContactForm::new(name, phone, message);
    match app.contact_service().submit(&form).await {
        ContactOutcome::Sent(message) => {
            println!("{}", message);
            Ok(())
        }
        ContactOutcome::Failed(message) => bail!(message),
    }
}

fn whatsapp(app: &Application, quick: Option<&str>, message: Option<&str>) -> Result<()> {
    let contact = app.contact_service();

    let link = match (quick, message) {
        (Some(key), _) => contact.whatsapp_quick(key).ok_or_else(|| {
            let keys: Vec<&str> = QUICK_MESSAGES.iter().map(|q| q.key).collect();
            anyhow!("Mensaje desconocido '{}'. Opciones: {}", key, keys.join(", "))
        })?,
        (None, Some(text)) => contact.whatsapp_custom(text),
        (None, None) => contact.whatsapp_default(),
    };

    if let Some(quick) = quick.and_then(quick_message) {
        println!("{}", quick.title);
    }
    println!("{}", link);
    Ok(())
}

// =============================================================================
// Helpers
// =============================================================================

fn confirm(prompt: &str, assume_yes: bool) -> Result<bool> {
    if assume_yes {
        return Ok(true);
    }

    print!("{} [s/N] ", prompt);
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;
    Ok(matches!(
        answer.trim().to_lowercase().as_str(),
        "s" | "si" | "sí" | "y" | "yes"
    ))
}

fn form_failure(error: Option<&str>) -> String {
    error.unwrap_or(GENERIC_FAILURE_MESSAGE).to_string()
}
