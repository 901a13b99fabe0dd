//! Built-in datasets shown when the backend cannot be reached.

use super::{Product, Service, StaticSlide};

const PLACEHOLDER_SLIDE: &str = "/placeholder.svg?height=600&width=1200";

/// Fallback carousel slides, also rendered before mount.
pub const STATIC_SLIDES: [StaticSlide; 3] = [
    StaticSlide {
        src: PLACEHOLDER_SLIDE,
        alt: "Instalación profesional de cámaras de seguridad",
        title: "Sistemas de Seguridad Profesional",
        description: "Protege tu hogar y negocio con nuestras cámaras de última tecnología",
    },
    StaticSlide {
        src: PLACEHOLDER_SLIDE,
        alt: "Servicios de informática especializada",
        title: "Servicios de Informática",
        description: "Soporte técnico, reparación de equipos y soluciones IT integrales",
    },
    StaticSlide {
        src: PLACEHOLDER_SLIDE,
        alt: "Instalación y mantenimiento de aires acondicionados",
        title: "Climatización Profesional",
        description: "Instalación, mantenimiento y reparación de sistemas de climatización",
    },
];

fn features(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub fn fallback_services() -> Vec<Service> {
    let service = |id: &str, name: &str, description: &str, price: f64, category: &str, icon: &str, minutes: u32, feats: &[&str]| Service {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        price,
        category: category.to_string(),
        icon: Some(icon.to_string()),
        is_active: true,
        estimated_duration: minutes,
        features: features(feats),
        created_at: None,
    };

    vec![
        service(
            "1",
            "Sistemas de Seguridad",
            "Cámaras IP, CCTV, alarmas y control de acceso",
            299.0,
            "Seguridad",
            "shield",
            120,
            &["Cámaras HD/4K", "Monitoreo remoto", "Grabación en la nube", "Instalación profesional"],
        ),
        service(
            "2",
            "Aires Acondicionados",
            "Instalación, reparación y mantenimiento",
            599.0,
            "Climatización",
            "snowflake",
            180,
            &["Todas las marcas", "Servicio 24/7", "Repuestos originales", "Garantía extendida"],
        ),
        service(
            "3",
            "Servicios de Informática",
            "Soporte técnico y soluciones IT",
            149.0,
            "Informática",
            "monitor",
            90,
            &["Reparación de PC", "Redes y WiFi", "Software y hardware", "Consultoría IT"],
        ),
        service(
            "4",
            "Reparaciones Generales",
            "Mantenimiento integral para hogar y negocio",
            99.0,
            "Mantenimiento",
            "wrench",
            60,
            &["Electricidad", "Plomería", "Carpintería", "Pintura y acabados"],
        ),
    ]
}

pub fn fallback_products() -> Vec<Product> {
    let product = |id: &str, name: &str, description: &str, price: f64, category: &str, stock: u32, feats: &[&str]| Product {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        price,
        category: category.to_string(),
        icon: None,
        image: Some("/placeholder.svg?height=300&width=300".to_string()),
        is_active: true,
        stock,
        features: features(feats),
        created_at: None,
    };

    vec![
        product(
            "1",
            "Cámara IP 4K",
            "Cámara de seguridad con resolución 4K",
            299.0,
            "Seguridad",
            15,
            &["Resolución 4K", "Visión nocturna", "Audio bidireccional", "Resistente al agua"],
        ),
        product(
            "2",
            "Kit de 4 Cámaras",
            "Kit completo de videovigilancia",
            899.0,
            "Seguridad",
            8,
            &["4 cámaras HD", "DVR incluido", "Cables y accesorios", "App móvil gratuita"],
        ),
        product(
            "3",
            "Aire Split 12000 BTU",
            "Aire acondicionado Split inverter",
            599.0,
            "Climatización",
            12,
            &["Inverter", "Bajo consumo", "Control remoto", "Instalación incluida"],
        ),
        product(
            "4",
            "Sistema de Alarma",
            "Sistema de alarma inalámbrico",
            399.0,
            "Seguridad",
            20,
            &["Sensores inalámbricos", "Panel táctil", "Notificaciones móvil", "Batería de respaldo"],
        ),
    ]
}
