//! Terminal output for the console commands.

use crate::application::services::{CatalogRow, SlideRow, SlideView};
use crate::domain::services::{format_price, status_label, CatalogEntity, CatalogStats};
use crate::domain::{ImageInfo, Identified, StockStatus};

pub fn catalog_rows(rows: &[CatalogRow]) {
    if rows.is_empty() {
        println!("Sin resultados.");
        return;
    }

    println!(
        "{:<26} {:<34} {:<16} {:>14} {:<9} {:<12}",
        "ID", "NOMBRE", "CATEGORÍA", "PRECIO", "ESTADO", "DETALLE"
    );
    for row in rows {
        let detail = match (row.stock, row.stock_label, row.duration_minutes) {
            (Some(stock), Some(label), _) => format!("{} ({})", label, stock),
            (_, _, Some(minutes)) => format!("{} min", minutes),
            _ => String::new(),
        };
        println!(
            "{:<26} {:<34} {:<16} {:>14} {:<9} {:<12}",
            truncate(&row.id, 26),
            truncate(&row.name, 34),
            truncate(&row.category_label, 16),
            row.price,
            row.status,
            detail
        );
    }
}

pub fn catalog_stats(stats: &CatalogStats, with_stock: bool) {
    println!();
    println!(
        "Total: {}  Activos: {}  Inactivos: {}  Categorías: {}",
        stats.total, stats.active, stats.inactive, stats.categories
    );
    if with_stock {
        println!(
            "Stock total: {}  Sin stock: {}  Stock bajo: {}  Valor inventario: {}",
            stats.total_stock,
            stats.out_of_stock,
            stats.low_stock,
            format_price(stats.inventory_value)
        );
    } else {
        println!("Precio promedio: {}", format_price(stats.average_price));
    }
}

/// Public listing: name, price and, for products, the stock badge.
pub fn public_listing<T: CatalogEntity + Identified>(items: &[T]) {
    if items.is_empty() {
        println!("Sin resultados.");
        return;
    }
    for item in items {
        let badge = item
            .stock()
            .map(|s| format!("  [{}]", StockStatus::from_stock(s).label()))
            .unwrap_or_default();
        println!(
            "{:<34} {:>14}{}",
            truncate(item.name(), 34),
            format_price(item.price()),
            badge
        );
    }
}

pub fn slide_rows(rows: &[SlideRow]) {
    if rows.is_empty() {
        println!("No hay slides.");
        return;
    }

    println!(
        "{:>3} {:<26} {:<36} {:<9} {:<6}",
        "#", "ID", "TÍTULO", "ESTADO", "MOVER"
    );
    for row in rows {
        let moves = format!(
            "{}{}",
            if row.can_move_up { "↑" } else { " " },
            if row.can_move_down { "↓" } else { " " }
        );
        println!(
            "{:>3} {:<26} {:<36} {:<9} {:<6}",
            row.position,
            truncate(&row.id, 26),
            truncate(&row.title, 36),
            row.status,
            moves
        );
    }
}

pub fn carousel_views(views: &[SlideView]) {
    for (i, view) in views.iter().enumerate() {
        let marker = if view.is_active { ">" } else { " " };
        println!("{} {}. {}", marker, i + 1, view.title);
    }
}

pub fn active_slide(index: usize, total: usize, view: &SlideView) {
    println!("[{}/{}] {}", index + 1, total, view.title);
    if !view.description.is_empty() {
        println!("      {}", view.description);
    }
    if let Some(cta) = &view.call_to_action {
        let link = cta.primary_link.as_deref().unwrap_or("/servicios");
        println!("      [{}]({})  [{}]", cta.primary_text, link, cta.secondary_text);
    }
}

pub fn images(images: &[ImageInfo]) {
    if images.is_empty() {
        println!("No hay imágenes.");
        return;
    }
    println!("{:<40} {:>10} {:<20} URL", "ARCHIVO", "TAMAÑO", "CREADA");
    for image in images {
        let created = image
            .created_at()
            .map(|at| at.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_default();
        println!(
            "{:<40} {:>10} {:<20} {}",
            truncate(&image.filename, 40),
            human_size(image.size),
            created,
            image.url
        );
    }
}

pub fn active_flag(name: &str, is_active: bool) {
    println!("{}: {}", name, status_label(is_active));
}

fn human_size(bytes: u64) -> String {
    const KIB: f64 = 1024.0;
    let bytes = bytes as f64;
    if bytes < KIB {
        format!("{} B", bytes)
    } else if bytes < KIB * KIB {
        format!("{:.1} KB", bytes / KIB)
    } else {
        format!("{:.1} MB", bytes / (KIB * KIB))
    }
}

fn truncate(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    let mut out: String = value.chars().take(width.saturating_sub(1)).collect();
    out.push('…');
    out
}
