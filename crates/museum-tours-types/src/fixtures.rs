//! Fixture data provider
//!
//! In-memory themes, objects and tour definitions with pure lookups. Serves
//! as the development data source and as a drop-in stand-in for the backend:
//! the dev server and the CLI's `--fixtures` mode answer from this table.

use crate::models::{MapPosition, MuseumObject, Theme, Tour, TourSize};

/// Fixed catalog of themes, objects and tours
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixtureCatalog {
    themes: Vec<Theme>,
    objects: Vec<MuseumObject>,
    tours: Vec<Tour>,
}

impl FixtureCatalog {
    /// Build a catalog from custom tables
    pub fn new(themes: Vec<Theme>, objects: Vec<MuseumObject>, tours: Vec<Tour>) -> Self {
        Self {
            themes,
            objects,
            tours,
        }
    }

    /// The bundled museum collection
    pub fn builtin() -> Self {
        Self::new(builtin_themes(), builtin_objects(), builtin_tours())
    }

    /// All themes, insertion order
    pub fn themes(&self) -> &[Theme] {
        &self.themes
    }

    pub fn theme(&self, id: &str) -> Option<&Theme> {
        self.themes.iter().find(|t| t.id == id)
    }

    /// All objects, insertion order
    pub fn objects(&self) -> &[MuseumObject] {
        &self.objects
    }

    pub fn object(&self, id: &str) -> Option<&MuseumObject> {
        self.objects.iter().find(|o| o.id == id)
    }

    /// Raw tour definitions
    pub fn tours(&self) -> &[Tour] {
        &self.tours
    }

    /// Tour definition for an exact (theme, size) pair
    pub fn tour(&self, theme_id: &str, size: TourSize) -> Option<&Tour> {
        self.tours.iter().find(|t| t.matches(theme_id, size))
    }

    /// Resolve a tour into its objects, in tour order.
    ///
    /// A missing (theme, size) entry yields an empty list, never an error.
    /// Ids that do not resolve to an object are dropped silently.
    pub fn tour_objects(&self, theme_id: &str, size: TourSize) -> Vec<MuseumObject> {
        let Some(tour) = self.tour(theme_id, size) else {
            return Vec::new();
        };

        tour.object_ids
            .iter()
            .filter_map(|id| self.object(id))
            .cloned()
            .collect()
    }

    /// Copy of this catalog without the given object (tour entries untouched)
    pub fn without_object(&self, id: &str) -> Self {
        let mut catalog = self.clone();
        catalog.objects.retain(|o| o.id != id);
        catalog
    }

    /// Tour entries that reference an id missing from the object table
    pub fn dangling_references(&self) -> Vec<(&Tour, &str)> {
        self.tours
            .iter()
            .flat_map(|tour| {
                tour.object_ids
                    .iter()
                    .filter(|id| self.object(id).is_none())
                    .map(move |id| (tour, id.as_str()))
            })
            .collect()
    }
}

impl Default for FixtureCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

fn theme(id: &str, name: &str, description: &str, image: &str) -> Theme {
    Theme {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        image: image.to_string(),
    }
}

#[allow(clippy::too_many_arguments)]
fn object(
    id: &str,
    title: &str,
    short_description: &str,
    contextual_background: &str,
    gallery_location: &str,
    image: &str,
    theme_id: &str,
    (top, left): (&str, &str),
) -> MuseumObject {
    MuseumObject {
        id: id.to_string(),
        title: title.to_string(),
        short_description: short_description.to_string(),
        contextual_background: contextual_background.to_string(),
        gallery_location: gallery_location.to_string(),
        image: image.to_string(),
        theme_ids: vec![theme_id.to_string()],
        map_position: MapPosition::new(top, left),
    }
}

fn builtin_themes() -> Vec<Theme> {
    vec![
        theme(
            "roman-empire",
            "The Roman Empire",
            "Explore the might and majesty of ancient Rome, from its military conquests to its intricate society.",
            "https://placehold.co/600x400/A3BFFA/000000?text=Roman+Empire",
        ),
        theme(
            "ancient-egypt",
            "Ancient Egypt",
            "Uncover the mysteries of the pharaohs, their gods, and the enduring legacy of a civilization along the Nile.",
            "https://placehold.co/600x400/FFD700/000000?text=Ancient+Egypt",
        ),
        theme(
            "renaissance-art",
            "Renaissance Art",
            "Witness the rebirth of art and culture in Europe, featuring masterpieces of unparalleled beauty and skill.",
            "https://placehold.co/600x400/D1B48C/000000?text=Renaissance+Art",
        ),
        theme(
            "ancient-greece",
            "Ancient Greece",
            "Journey back to the cradle of Western civilization and discover the art, philosophy, and politics of the ancient Greeks.",
            "https://placehold.co/600x400/B0E0E6/000000?text=Ancient+Greece",
        ),
    ]
}

fn builtin_objects() -> Vec<MuseumObject> {
    vec![
        // Roman Empire
        object(
            "obj-01",
            "Legionary Helmet",
            "A standard issue helmet for a Roman legionary.",
            "The Galea, or Roman helmet, was a critical piece of equipment for the Roman soldier. Its design evolved over centuries, providing protection from swords, arrows, and other battlefield threats. This particular piece dates back to the 1st century AD and shows signs of use in campaign.",
            "Floor 1, Room 3",
            "https://placehold.co/800x600/94a3b8/ffffff?text=Legionary+Helmet",
            "roman-empire",
            ("25%", "15%"),
        ),
        object(
            "obj-02",
            "Bust of Augustus",
            "A marble bust of the first Roman Emperor, Augustus.",
            "This portrait of Augustus, the founder of the Roman Empire, captures the idealized and calm expression typical of Augustan art. It was used as a powerful tool of political propaganda, distributed throughout the empire to promote his image as a strong and benevolent ruler.",
            "Floor 1, Room 3",
            "https://placehold.co/800x600/a1a1aa/ffffff?text=Bust+of+Augustus",
            "roman-empire",
            ("28%", "20%"),
        ),
        object(
            "obj-03",
            "Roman Coin Hoard",
            "A collection of silver denarii.",
            "Coin hoards like this one provide invaluable information about the Roman economy, trade routes, and the movement of armies. This collection was found buried in a ceramic pot, likely hidden for safekeeping during a period of unrest.",
            "Floor 1, Room 4",
            "https://placehold.co/800x600/a3a3a3/ffffff?text=Roman+Coins",
            "roman-empire",
            ("35%", "30%"),
        ),
        // Ancient Egypt
        object(
            "obj-04",
            "Rosetta Stone",
            "The key to deciphering Egyptian hieroglyphs.",
            "Discovered in 1799, the Rosetta Stone is inscribed with a decree issued at Memphis, Egypt, in 196 BC on behalf of King Ptolemy V. The decree appears in three scripts: Ancient Egyptian hieroglyphs, Demotic script, and Ancient Greek, which made it possible to finally understand hieroglyphs.",
            "Floor 2, Room 10",
            "https://placehold.co/800x600/737373/ffffff?text=Rosetta+Stone",
            "ancient-egypt",
            ("50%", "55%"),
        ),
        object(
            "obj-05",
            "Sarcophagus of Seti I",
            "An intricately carved alabaster sarcophagus.",
            "This magnificent sarcophagus was made for Pharaoh Seti I. It is adorned with texts from the Book of Gates, a sacred text describing the journey of the soul through the underworld. Although the pharaoh's mummy was not found inside, it remains a masterpiece of Egyptian funerary art.",
            "Floor 2, Room 12",
            "https://placehold.co/800x600/ca8a04/ffffff?text=Sarcophagus",
            "ancient-egypt",
            ("55%", "65%"),
        ),
        object(
            "obj-06",
            "Canopic Jars",
            "Vessels used in the mummification process.",
            "Canopic jars were used by the ancient Egyptians during the mummification process to store and preserve the viscera of their owner for the afterlife. They were commonly carved from limestone or made of pottery.",
            "Floor 2, Room 12",
            "https://placehold.co/800x600/eab308/ffffff?text=Canopic+Jars",
            "ancient-egypt",
            ("58%", "70%"),
        ),
        // Renaissance Art
        object(
            "obj-07",
            "The Vitruvian Man Drawing",
            "A study of proportions by Leonardo da Vinci.",
            "Leonardo da Vinci's drawing is a cornerstone of Renaissance art, blending artistic skill with scientific inquiry. It depicts a man in two superimposed positions with his arms and legs apart and inscribed in a circle and square, representing the ideal human body proportions as described by the ancient Roman architect Vitruvius.",
            "Floor 3, Room 21",
            "https://placehold.co/800x600/7c2d12/ffffff?text=Vitruvian+Man",
            "renaissance-art",
            ("70%", "40%"),
        ),
        object(
            "obj-08",
            "Bronze statue of David",
            "A bronze statue by Donatello.",
            "Donatello's David is one of the most significant works of the early Renaissance. It was the first unsupported standing work of bronze cast during the Renaissance and the first freestanding nude male sculpture made since antiquity. It symbolizes the victory of civic virtue and freedom.",
            "Floor 3, Room 22",
            "https://placehold.co/800x600/92400e/ffffff?text=Statue+of+David",
            "renaissance-art",
            ("75%", "50%"),
        ),
        // Ancient Greece
        object(
            "obj-09",
            "Parthenon Marbles",
            "Sculptures from the pediments of the Parthenon.",
            "Also known as the Elgin Marbles, these sculptures are masterpieces of classical Greek art. They originally adorned the Parthenon temple on the Athenian Acropolis and depict scenes from Greek mythology, representing the pinnacle of artistic achievement in 5th-century BC Athens.",
            "Floor 1, Room 8",
            "https://placehold.co/800x600/d4d4d8/000000?text=Parthenon+Marbles",
            "ancient-greece",
            ("40%", "45%"),
        ),
        object(
            "obj-10",
            "Bust of Pericles",
            "A Roman copy of a Greek original.",
            "This bust depicts Pericles, the influential Athenian statesman and general during the city's Golden Age. The helmet symbolizes his role as a military leader. The idealized features reflect the classical Greek ideal of a calm, rational, and dignified leader.",
            "Floor 1, Room 8",
            "https://placehold.co/800x600/e4e4e7/000000?text=Bust+of+Pericles",
            "ancient-greece",
            ("42%", "50%"),
        ),
        object(
            "obj-11",
            "Athenian Owl Tetradrachm",
            "An ancient silver coin of Athens.",
            "The 'Owl' was one of the most influential coins of the ancient world. On the obverse is the head of the goddess Athena, and on the reverse is her symbol, the owl. These coins were widely used in trade and are a symbol of Athens' economic power and cultural influence.",
            "Floor 1, Room 9",
            "https://placehold.co/800x600/e5e5e5/000000?text=Athenian+Coin",
            "ancient-greece",
            ("45%", "58%"),
        ),
    ]
}

// Medium and Large share a list for several themes; kept as published.
fn builtin_tours() -> Vec<Tour> {
    use TourSize::{Large, Medium, Small};

    vec![
        Tour::new("roman-empire", Small, &["obj-01", "obj-02"]),
        Tour::new("roman-empire", Medium, &["obj-01", "obj-02", "obj-03"]),
        Tour::new("roman-empire", Large, &["obj-01", "obj-02", "obj-03"]),
        Tour::new("ancient-egypt", Small, &["obj-04", "obj-05"]),
        Tour::new("ancient-egypt", Medium, &["obj-04", "obj-05", "obj-06"]),
        Tour::new("ancient-egypt", Large, &["obj-04", "obj-05", "obj-06"]),
        Tour::new("renaissance-art", Small, &["obj-07", "obj-08"]),
        Tour::new("renaissance-art", Medium, &["obj-07", "obj-08"]),
        Tour::new("renaissance-art", Large, &["obj-07", "obj-08"]),
        Tour::new("ancient-greece", Small, &["obj-09", "obj-10"]),
        Tour::new("ancient-greece", Medium, &["obj-09", "obj-10", "obj-11"]),
        Tour::new("ancient-greece", Large, &["obj-09", "obj-10", "obj-11"]),
    ]
}
