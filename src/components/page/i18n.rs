//! Spanish/English text for elements tagged with `data-i18n`.

use std::cell::Cell;
use std::rc::Rc;

use log::info;
use wasm_bindgen::JsValue;
use web_sys::Document;

use super::{elements, on_click};

/// Page language.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Lang {
	/// Spanish, the page's initial language.
	#[default]
	Es,
	/// English.
	En,
}

impl Lang {
	/// The other language.
	pub fn toggled(self) -> Self {
		match self {
			Lang::Es => Lang::En,
			Lang::En => Lang::Es,
		}
	}

	/// Label for the toggle button, naming the language it switches to.
	pub fn toggle_label(self) -> &'static str {
		match self {
			Lang::Es => "EN",
			Lang::En => "ES",
		}
	}

	/// ISO 639-1 code.
	pub fn code(self) -> &'static str {
		match self {
			Lang::Es => "es",
			Lang::En => "en",
		}
	}
}

/// `(key, es, en)`
const TRANSLATIONS: &[(&str, &str, &str)] = &[
	("nav_about", "Sobre Mí", "About Me"),
	("nav_skills", "Habilidades", "Skills"),
	("nav_projects", "Proyectos", "Projects"),
	("nav_contact", "Contacto", "Contact"),
	("hero_subtitle", "Denis Leandro Borri", "Denis Leandro Borri"),
	(
		"hero_title",
		"ANALISTA FUNCIONAL <br><span class='highlight'>EN SISTEMAS INFORMATICOS</span>",
		"SYSTEMS ANALYST <br><span class='highlight'>& DEVELOPER</span>",
	),
	(
		"hero_desc",
		"Desarrollador Frontend / Backend & Desarrollador UI/UX",
		"Frontend / Backend Developer & UI/UX Designer",
	),
	("hero_explore", "Explorar", "Explore"),
	("about_title", "01. Sobre Mí", "01. About Me"),
	(
		"about_text1",
		"Soy Analista En Sistemas Informáticos y Programador, enfocado en el desarrollo web y en la creación de soluciones digitales funcionales. Trabajo con HTML, CSS y JavaScript, combinando una base técnica sólida con una mirada práctica orientada a resolver problemas reales.",
		"I am a Systems Analyst and Programmer, focused on web development and creating functional digital solutions. I work with HTML, CSS, and JavaScript, combining a solid technical foundation with a practical approach oriented towards solving real problems.",
	),
	(
		"about_text2",
		"Tengo experiencia desarrollando proyectos propios y emprendimientos, lo que me permitió integrar tecnología, organización y pensamiento estratégico. Me motiva aprender de forma constante y aplicar la programación para optimizar procesos y generar valor.",
		"I have experience developing personal projects and ventures, which allowed me to integrate technology, organization, and strategic thinking. I am motivated by constant learning and applying programming to optimize processes and generate value.",
	),
	("skills_title", "02. Habilidades", "02. Skills"),
	("skills_frontend", "Frontend", "Frontend"),
	("skills_backend", "Backend", "Backend"),
	("skills_tools", "Herramientas", "Tools"),
	("projects_title", "03. Proyectos Seleccionados", "03. Selected Projects"),
	(
		"project1_desc",
		"Sitio web desarrollado para AB Shine. Solución completa de presencia digital.",
		"Website developed for AB Shine. Complete digital presence solution.",
	),
	("project_future_title", "Próximamente", "Coming Soon"),
	(
		"project_future_desc",
		"Trabajando en nuevas ideas y soluciones innovadoras.",
		"Working on new ideas and innovative solutions.",
	),
	("contact_title", "04. Contacto", "04. Contact"),
	(
		"contact_text",
		"¿Tienes un proyecto en mente que desafíe la gravedad? Hablemos.",
		"Have a project in mind that defies gravity? Let's talk.",
	),
	("contact_cta", "Iniciar Conversación", "Start Conversation"),
];

/// Look up the text for `key` in `lang`.
pub fn translate(lang: Lang, key: &str) -> Option<&'static str> {
	TRANSLATIONS
		.iter()
		.find(|(k, _, _)| *k == key)
		.map(|&(_, es, en)| match lang {
			Lang::Es => es,
			Lang::En => en,
		})
}

/// Notice shown in place of the CV download.
pub fn cv_notice(lang: Lang) -> &'static str {
	match lang {
		Lang::Es => "El Curriculum Vitae se está actualizando. Por favor, vuelve pronto.",
		Lang::En => "The Curriculum Vitae is being updated. Please come back soon.",
	}
}

/// Rewrite every `[data-i18n]` element in `lang`. Unknown keys are left alone.
pub fn apply_language(document: &Document, lang: Lang) -> Result<(), JsValue> {
	for element in elements(document, "[data-i18n]")? {
		let Some(text) = element
			.get_attribute("data-i18n")
			.and_then(|key| translate(lang, &key))
		else {
			continue;
		};
		if text.contains('<') {
			element.set_inner_html(text);
		} else {
			element.set_text_content(Some(text));
		}
	}

	if let Some(button) = document.get_element_by_id("lang-toggle") {
		button.set_text_content(Some(lang.toggle_label()));
	}
	Ok(())
}

/// Switch languages when `#lang-toggle` is clicked.
pub fn wire_language_toggle(document: &Document, current: Rc<Cell<Lang>>) -> Result<(), JsValue> {
	let Some(button) = document.get_element_by_id("lang-toggle") else {
		log::warn!("page: #lang-toggle not found, language switching disabled");
		return Ok(());
	};

	let document = document.clone();
	on_click(&button, move |_| {
		let lang = current.get().toggled();
		current.set(lang);
		info!("page: language switched to {}", lang.code());
		if let Err(e) = apply_language(&document, lang) {
			log::warn!("page: failed to apply language: {:?}", e);
		}
	})
}
