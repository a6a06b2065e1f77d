//! Static page content: hero, chapters and closing message.

use serde::Deserialize;

/// One chapter of the timeline.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Chapter {
	pub title: String,
	pub text: String,
	/// Image URLs, shown in a grid under the text.
	pub images: Vec<String>,
}

impl Chapter {
	/// CSS modifier for the photo grid: four-up for exactly four photos,
	/// two-up otherwise.
	pub fn grid_class(&self) -> &'static str {
		if self.images.len() == 4 { "four" } else { "two" }
	}

	/// Alt text for the photo at `index` (zero-based).
	pub fn photo_alt(&self, index: usize) -> String {
		format!("{} photo {}", self.title, index + 1)
	}
}

/// Everything the page displays. Missing JSON fields fall back to the
/// built-in content.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct PageContent {
	pub title: String,
	pub subtitle: String,
	pub hero_left_image: String,
	pub hero_right_image: String,
	pub badges: Vec<String>,
	pub chapters: Vec<Chapter>,
	pub final_title: String,
	pub final_message: String,
	/// ISO date the elapsed counter counts from. No counter when absent.
	pub together_since: Option<String>,
}

impl Default for PageContent {
	fn default() -> Self {
		Self {
			title: "À notre Saint Valentin".into(),
			subtitle: "Un petit endroit rien qu’à nous, pour revivre notre histoire 🥰".into(),
			hero_left_image: "src/Photo-ronde-droite.jpg".into(),
			hero_right_image: "src/Photo-ronde-gauche.jpg".into(),
			badges: vec![
				"Nos souvenirs ✨".into(),
				"Nos photos 📸".into(),
				"Toi & moi ❤️".into(),
			],
			chapters: vec![
				Chapter {
					title: "Le début de notre amour".into(),
					text: "Le jour où tout a commencé. J’aime repenser à ce moment et me dire \
					       qu'on a eu tellement de chance de se rencontrer 😍"
						.into(),
					images: vec!["src/photo 1.jpg".into()],
				},
				Chapter {
					title: "Chapitre 2 — Nos premiers souvenirs".into(),
					text: "Nos premières habitudes, nos rires, nos petits trucs à nous… et \
					       cette évidence : j’étais bien, avec toi."
						.into(),
					images: vec![
						"src/photo 2.jpg".into(),
						"src/photo 3.jpg".into(),
						"src/photo 4.jpg".into(),
						"src/c2-4.jpg".into(),
					],
				},
				Chapter {
					title: "Chapitre 3 — Aujourd’hui".into(),
					text: "Je te choisis, chaque jour. Pour ce que tu es, pour ce que tu \
					       m’apportes, et pour tout ce qu’on construit."
						.into(),
					images: vec!["src/c3-1.jpg".into(), "src/c3-2.jpg".into()],
				},
			],
			final_title: "Un dernier mot".into(),
			final_message: "Je te souhaite une bonne Saint Valentin ma chérie, merci \
			                 d’exister et de faire partie de ma vie. Je t’aime ❤️"
				.into(),
			together_since: None,
		}
	}
}
