//! Built-in portfolio corpus, one record per page section.

use super::index::{Record, RecordKind};

const INDEX: &str = "index.html";
const ABOUT: &str = "sobre-mi.html";
const PROJECTS: &str = "proyectos.html";
const HOBBIES: &str = "aficiones.html";
const CONTACT: &str = "contacto.html";

/// (title, content, url, kind, section), in display order.
const ENTRIES: &[(&str, &str, &str, RecordKind, &str)] = &[
    // Home
    (
        "Desarrollador y Arquitecto de Software",
        "Dayver David De la hoz Torregrosa desarrollador arquitecto software AWS microservicios bases datos",
        INDEX,
        RecordKind::Page,
        "inicio",
    ),
    (
        "Experiencia en AWS",
        "AWS Lambda EC2 S3 RDS CloudFormation cloud computing servicios web amazon",
        INDEX,
        RecordKind::Skill,
        "inicio",
    ),
    (
        "Microservicios y Docker",
        "microservicios docker kubernetes contenedores arquitectura distribuida API REST",
        INDEX,
        RecordKind::Skill,
        "inicio",
    ),
    // About
    (
        "Experiencia Profesional - Exdesis",
        "Exdesis desarrollador senior arquitecto software 12 años experiencia aplicaciones empresariales",
        ABOUT,
        RecordKind::Experience,
        "sobre-mi",
    ),
    (
        "Máster en Ingeniería Web",
        "Universidad Oviedo máster ingeniería web UX UI accesibilidad usabilidad",
        ABOUT,
        RecordKind::Education,
        "sobre-mi",
    ),
    (
        "Habilidades Técnicas",
        "Java Spring Boot Node.js Python Django C# .NET JavaScript TypeScript React Vue",
        ABOUT,
        RecordKind::Skill,
        "sobre-mi",
    ),
    (
        "Bases de Datos",
        "SQL Server PostgreSQL MySQL MongoDB Redis optimización consultas administración",
        ABOUT,
        RecordKind::Skill,
        "sobre-mi",
    ),
    (
        "Certificaciones AWS",
        "AWS Solutions Architect Professional DevOps Engineer SysOps Administrator certificado",
        ABOUT,
        RecordKind::Certification,
        "sobre-mi",
    ),
    // Projects
    (
        "Migración a Microservicios",
        "migración monolítico microservicios transformación digital arquitectura Domain-Driven Design",
        PROJECTS,
        RecordKind::Project,
        "proyectos",
    ),
    (
        "Infraestructura AWS Cloud-Native",
        "AWS infraestructura cloud native EC2 Lambda RDS S3 CloudFront auto-scaling",
        PROJECTS,
        RecordKind::Project,
        "proyectos",
    ),
    (
        "Optimización Bases de Datos",
        "optimización bases datos rendimiento queries índices particionado read replicas caching",
        PROJECTS,
        RecordKind::Project,
        "proyectos",
    ),
    (
        "Platform DevOps AI/ML",
        "DevOps plataforma inteligente machine learning AI predicción fallos auto-healing",
        PROJECTS,
        RecordKind::Project,
        "proyectos",
    ),
    // Hobbies
    (
        "Tecnología y Open Source",
        "open source contribuciones GitHub tecnología innovación IA machine learning",
        HOBBIES,
        RecordKind::Hobby,
        "aficiones",
    ),
    (
        "Lectura Técnica",
        "libros técnicos Clean Architecture Phoenix Project Designing Data-Intensive Applications",
        HOBBIES,
        RecordKind::Hobby,
        "aficiones",
    ),
    (
        "Deporte y Running",
        "running senderismo ciclismo natación deporte vida activa ejercicio salud",
        HOBBIES,
        RecordKind::Hobby,
        "aficiones",
    ),
    (
        "Música y Desarrollo",
        "música programación lo-fi jazz electrónica ambient coding playlists",
        HOBBIES,
        RecordKind::Hobby,
        "aficiones",
    ),
    (
        "Gaming y Tecnología",
        "videojuegos gaming Unity Unreal Godot engines desarrollo juegos WebGL",
        HOBBIES,
        RecordKind::Hobby,
        "aficiones",
    ),
    // Contact
    (
        "Información de Contacto",
        "contacto email LinkedIn GitHub consultas técnicas proyectos colaboración Oviedo",
        CONTACT,
        RecordKind::Contact,
        "contacto",
    ),
    (
        "Formulario de Contacto",
        "formulario contacto consultoría técnica propuestas proyectos colaboración empleo",
        CONTACT,
        RecordKind::Contact,
        "contacto",
    ),
];

pub(crate) fn portfolio_records() -> Vec<Record> {
    ENTRIES
        .iter()
        .map(|&(title, content, url, kind, section)| Record::new(title, content, url, kind, section))
        .collect()
}
