// SPDX-License-Identifier: PMPL-1.0-or-later

//! Embedded content texts (education, work history, projects) per language.

use super::bundle::{EducationText, LocalizedBundle, ProjectText, WorkText};
use super::catalog::{labels, Lang};

struct Education {
    key: &'static str,
    title: &'static str,
    details: &'static [&'static str],
}

struct Work {
    key: &'static str,
    title: &'static str,
    company_name: &'static str,
    location: &'static str,
    description: &'static str,
    achievements: &'static [&'static str],
}

struct Project {
    key: &'static str,
    title: &'static str,
    description: &'static str,
}

/// Build the full bundle (labels and nested texts) for one language.
pub(super) fn bundle(lang: Lang) -> LocalizedBundle {
    let (education, work, projects) = match lang {
        Lang::Es => (EDUCATION_ES, WORK_ES, PROJECTS_ES),
        Lang::En => (EDUCATION_EN, WORK_EN, PROJECTS_EN),
    };

    LocalizedBundle {
        labels: labels(lang)
            .iter()
            .map(|&(k, v)| (k.to_string(), v.to_string()))
            .collect(),
        education_data: education
            .iter()
            .map(|e| {
                let text = EducationText {
                    title: e.title.to_string(),
                    details: owned(e.details),
                };
                (e.key.to_string(), text)
            })
            .collect(),
        work_data: work
            .iter()
            .map(|w| {
                let text = WorkText {
                    title: w.title.to_string(),
                    company_name: w.company_name.to_string(),
                    location: w.location.to_string(),
                    description: w.description.to_string(),
                    achievements: owned(w.achievements),
                };
                (w.key.to_string(), text)
            })
            .collect(),
        projects: projects
            .iter()
            .map(|p| {
                let text = ProjectText {
                    title: p.title.to_string(),
                    description: p.description.to_string(),
                };
                (p.key.to_string(), text)
            })
            .collect(),
    }
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

// ─── Spanish ────────────────────────────────────────────────────────

const EDUCATION_ES: &[Education] = &[
    Education {
        key: "computerEngineering",
        title: "Ingeniería Informática",
        details: &["Actualmente cursando el primer año del grado en Ingeniería Informática, enfocado en la especialización de Ingeniería del Software. Este programa integral cubre metodologías avanzadas de desarrollo de software, diseño de arquitectura de sistemas, gestión de bases de datos y tecnologías emergentes como IA y computación en la nube. El plan de estudios enfatiza habilidades prácticas de resolución de problemas y prácticas de desarrollo estándar de la industria."],
    },
    Education {
        key: "daw",
        title: "Desarrollo de Aplicaciones Web (DAW)",
        details: &["Diseñar páginas web y desplegar/instalar aplicaciones en servidores con programación de navegador y servidor, utilizando las tecnologías profesionales más demandadas."],
    },
];

const WORK_ES: &[Work] = &[Work {
    key: "peereira7",
    title: "Creador de VFX & GFX | Gestor del Canal",
    company_name: "Canal de Peereira7",
    location: "Madrid, España",
    description: "Dirigí la dirección creativa y producción para un canal de YouTube exitoso con más de 3 años de experiencia en edición de video, gráficos en movimiento y efectos visuales. Gestioné la presencia en redes sociales, diseñé miniaturas y banners, y coordiné la estrategia de contenido. Desarrollé experiencia en Adobe Creative Suite, DaVinci Resolve y After Effects mientras construía un portafolio sólido de contenido digital.",
    achievements: &[
        "Gestioné un canal de YouTube exitoso con estrategia de contenido consistente",
        "Creé miniaturas y banners de alta calidad para contenido de video",
        "Desarrollé experiencia en edición de video y gráficos en movimiento",
        "Coordiné la presencia en redes sociales en múltiples plataformas",
    ],
}];

const PROJECTS_ES: &[Project] = &[
    Project {
        key: "dawflix",
        title: "Netflix Clone (en desarrollo)",
        description: "Un clon de Netflix desarrollado en Diseño de Interfaces, enfocado en mejorar el diseño funcional con Figma y trabajo en equipo colaborativo.",
    },
    Project {
        key: "artus",
        title: "Art Us (en desarrollo)",
        description: "Art Us es una plataforma global para que los artistas compartan, colaboren, monetizen e innoven, creando una comunidad artística inclusiva y colaborativa.",
    },
    Project {
        key: "thebliss",
        title: "The Bliss",
        description: "Otro proyecto que destaca mi experiencia en desarrollo backend con Node.js y MongoDB.",
    },
    Project {
        key: "peereira7",
        title: "Peereira7",
        description: "Edición de video, diseño de banners y miniaturas. Gestión de redes sociales durante 3 años.",
    },
];

// ─── English ────────────────────────────────────────────────────────

const EDUCATION_EN: &[Education] = &[
    Education {
        key: "computerEngineering",
        title: "Computer Engineering",
        details: &["Currently pursuing the first year of Computer Engineering degree, focusing on the Software Engineering track. This comprehensive program covers advanced software development methodologies, system architecture design, database management, and emerging technologies like AI and cloud computing. The curriculum emphasizes practical problem-solving skills and industry-standard development practices."],
    },
    Education {
        key: "daw",
        title: "Web Application Development (DAW)",
        details: &["Design web pages and deploy/install applications on servers with browser and server programming, using the most in-demand professional technologies."],
    },
];

const WORK_EN: &[Work] = &[Work {
    key: "peereira7",
    title: "VFX & GFX Creator | Channel Manager",
    company_name: "Peereira7 Channel",
    location: "Madrid, Spain",
    description: "Led creative direction and production for a successful YouTube channel with over 3 years of experience in video editing, motion graphics, and visual effects. Managed social media presence, designed thumbnails and banners, and coordinated content strategy. Developed expertise in Adobe Creative Suite, DaVinci Resolve, and After Effects while building a strong portfolio of digital content.",
    achievements: &[
        "Managed successful YouTube channel with consistent content strategy",
        "Created high-quality thumbnails and banners for video content",
        "Developed expertise in video editing and motion graphics",
        "Coordinated social media presence across multiple platforms",
    ],
}];

const PROJECTS_EN: &[Project] = &[
    Project {
        key: "dawflix",
        title: "Netflix Clone (working on)",
        description: "A Netflix clone developed in Interface Design, focusing on enhancing functional design with Figma and collaborative teamwork.",
    },
    Project {
        key: "artus",
        title: "Art Us (working on)",
        description: "Art Us is a global platform for artists to share, collaborate, monetize, and innovate, creating an inclusive and collaborative artistic community.",
    },
    Project {
        key: "thebliss",
        title: "The Bliss",
        description: "Another project that highlights my expertise in backend development with Node.js and MongoDB.",
    },
    Project {
        key: "peereira7",
        title: "Peereira7",
        description: "Video editing, banner and thumbnail design. Social media management for 3 years.",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_languages_carry_the_same_content_keys() {
        let es = bundle(Lang::Es);
        let en = bundle(Lang::En);
        for &section in crate::i18n::Section::all() {
            assert_eq!(es.keys(section), en.keys(section), "{} keys differ", section);
        }
    }

    #[test]
    fn bundle_includes_labels() {
        let en = bundle(Lang::En);
        assert_eq!(
            en.labels.get("footerText").map(String::as_str),
            Some("© 2025 Iván Mayoral. All rights reserved.")
        );
    }
}
