//! The anthology shipped with the binary. It seeds an empty store on first run
//! and doubles as realistic fixture data for tests.

use crate::models::{Gradient, LyricRecord};

struct Entry {
    id: &'static str,
    title: &'static str,
    artist: &'static str,
    excerpt: &'static str,
    lyrics: &'static [&'static str],
    mood: &'static [&'static str],
    era: &'static str,
    language: &'static str,
    length: &'static str,
    year: i32,
    gradient: (&'static str, &'static str),
    spotify_url: Option<&'static str>,
}

const ENTRIES: &[Entry] = &[
    Entry {
        id: "harbor-lights",
        title: "Harbor Lights",
        artist: "June Alder",
        excerpt: "Wait for me where the ferries sleep, I'll be the lamp you steer by.",
        lyrics: &[
            "Wait for me where the ferries sleep,",
            "I'll be the lamp you steer by.",
            "Every tide that pulls you out",
            "Carries your name back to the shore.",
        ],
        mood: &["Tender", "Bittersweet"],
        era: "80s",
        language: "English",
        length: "Medium",
        year: 1984,
        gradient: ("#fde2e4", "#cddafd"),
        spotify_url: Some("https://open.spotify.com/search/Harbor%20Lights"),
    },
    Entry {
        id: "luna-de-papel",
        title: "Luna de Papel",
        artist: "Los Hermanos Vela",
        excerpt: "Te dibujé una luna de papel para que nunca duermas sola.",
        lyrics: &[
            "Te dibujé una luna de papel",
            "para que nunca duermas sola.",
            "Si el viento se la lleva,",
            "te dibujo el cielo entero.",
        ],
        mood: &["Dreamy", "Tender"],
        era: "70s",
        language: "Spanish",
        length: "Short",
        year: 1976,
        gradient: ("#fff1e6", "#f8edeb"),
        spotify_url: None,
    },
    Entry {
        id: "braise",
        title: "Braise",
        artist: "Camille Sorel",
        excerpt: "Reste encore, la nuit n'a pas fini de brûler.",
        lyrics: &[
            "Reste encore, la nuit n'a pas fini de brûler,",
            "tes mains sur mes épaules comme deux étés.",
            "On a jeté les horloges par la fenêtre,",
            "il ne reste que nous et la braise.",
            "Reste encore.",
        ],
        mood: &["Passionate"],
        era: "2010s",
        language: "French",
        length: "Long",
        year: 2016,
        gradient: ("#ffb4a2", "#e5989b"),
        spotify_url: Some("https://open.spotify.com/search/Braise"),
    },
    Entry {
        id: "saudade-azul",
        title: "Saudade Azul",
        artist: "Marina Leal",
        excerpt: "O mar guardou teu nome numa concha azul.",
        lyrics: &[
            "O mar guardou teu nome numa concha azul,",
            "e toda noite eu encosto no ouvido.",
            "Não é tristeza, é só saudade",
            "de um verão que ainda não acabou.",
        ],
        mood: &["Bittersweet", "Dreamy"],
        era: "60s",
        language: "Portuguese",
        length: "Medium",
        year: 1967,
        gradient: ("#caf0f8", "#90e0ef"),
        spotify_url: None,
    },
    Entry {
        id: "vespa-rossa",
        title: "Vespa Rossa",
        artist: "Giulia e i Lampioni",
        excerpt: "Sali dietro, amore, la città è tutta nostra stasera.",
        lyrics: &[
            "Sali dietro, amore,",
            "la città è tutta nostra stasera.",
            "Un gelato, un semaforo rosso,",
            "e un bacio prima del verde.",
        ],
        mood: &["Playful", "Passionate"],
        era: "90s",
        language: "Italian",
        length: "Short",
        year: 1995,
        gradient: ("#ffccd5", "#ffb3c1"),
        spotify_url: Some("https://open.spotify.com/search/Vespa%20Rossa"),
    },
    Entry {
        id: "midnight-orchard",
        title: "Midnight Orchard",
        artist: "The Lovelace Choir",
        excerpt: "Apples glow like lanterns and I only see you.",
        lyrics: &[
            "Apples glow like lanterns in the midnight orchard,",
            "and I only see you.",
            "Pick the stars out of the branches,",
            "we'll plant them where the morning grew.",
        ],
        mood: &["Dreamy"],
        era: "2000s",
        language: "English",
        length: "Medium",
        year: 2004,
        gradient: ("#e2ece9", "#bee1e6"),
        spotify_url: None,
    },
    Entry {
        id: "fuego-lento",
        title: "Fuego Lento",
        artist: "Amaia Ríos",
        excerpt: "Quiéreme a fuego lento, que lo nuestro no tiene prisa.",
        lyrics: &[
            "Quiéreme a fuego lento,",
            "que lo nuestro no tiene prisa.",
            "Deja que arda la canción",
            "hasta que se apague la risa,",
            "y vuelva a empezar.",
        ],
        mood: &["Passionate", "Tender"],
        era: "2010s",
        language: "Spanish",
        length: "Long",
        year: 2016,
        gradient: ("#f28482", "#f5cac3"),
        spotify_url: Some("https://open.spotify.com/search/Fuego%20Lento"),
    },
    Entry {
        id: "paper-planes",
        title: "Paper Planes in the Rain",
        artist: "Theo Marsh",
        excerpt: "I folded every letter into wings.",
        lyrics: &[
            "I folded every letter into wings,",
            "threw them at your window in the rain.",
            "Half of them came down as confetti,",
            "the other half still fly your way.",
        ],
        mood: &["Playful", "Bittersweet"],
        era: "2010s",
        language: "English",
        length: "Short",
        year: 2018,
        gradient: ("#dee2ff", "#feeafa"),
        spotify_url: None,
    },
    Entry {
        id: "valse-des-lucioles",
        title: "Valse des Lucioles",
        artist: "Odile Marchand",
        excerpt: "Les lucioles nous prêtent leur lumière pour danser.",
        lyrics: &[
            "Les lucioles nous prêtent leur lumière,",
            "un, deux, trois, et la rivière tourne avec nous.",
            "Je ne sais pas valser,",
            "mais je sais te suivre.",
        ],
        mood: &["Dreamy", "Playful"],
        era: "60s",
        language: "French",
        length: "Medium",
        year: 1963,
        gradient: ("#fefae0", "#e9edc9"),
        spotify_url: None,
    },
    Entry {
        id: "estrela-cadente",
        title: "Estrela Cadente",
        artist: "Banda Aurora",
        excerpt: "Fiz um pedido e você apareceu na porta.",
        lyrics: &[
            "Vi uma estrela cair sobre o telhado,",
            "fiz um pedido e você apareceu na porta.",
            "Agora todo céu parece pouco",
            "pra tanto amor.",
        ],
        mood: &["Tender", "Dreamy"],
        era: "2000s",
        language: "Portuguese",
        length: "Short",
        year: 2007,
        gradient: ("#ffd6a5", "#fdffb6"),
        spotify_url: Some("https://open.spotify.com/search/Estrela%20Cadente"),
    },
];

/// Build owned records for the bundled anthology, in authored order.
pub fn anthology() -> Vec<LyricRecord> {
    ENTRIES
        .iter()
        .map(|entry| LyricRecord {
            id: entry.id.to_string(),
            title: entry.title.to_string(),
            artist: entry.artist.to_string(),
            excerpt: entry.excerpt.to_string(),
            lyrics: entry.lyrics.iter().map(|line| line.to_string()).collect(),
            mood: entry.mood.iter().map(|mood| mood.to_string()).collect(),
            era: entry.era.to_string(),
            language: entry.language.to_string(),
            length: entry.length.to_string(),
            year: entry.year,
            gradient: Gradient(entry.gradient.0.to_string(), entry.gradient.1.to_string()),
            spotify_url: entry.spotify_url.map(str::to_string),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{validate_records, Catalog};

    #[test]
    fn bundled_anthology_is_valid() {
        let records = anthology();
        assert_eq!(records.len(), ENTRIES.len());
        assert_eq!(validate_records(&records), Ok(()));
    }

    #[test]
    fn bundled_anthology_spans_five_languages() {
        let catalog = Catalog::new(anthology()).unwrap();
        assert_eq!(
            catalog.vocabulary().languages,
            ["English", "Spanish", "French", "Portuguese", "Italian"]
        );
    }

    #[test]
    fn bundled_trending_favours_recent_passionate_entries() {
        let catalog = Catalog::new(anthology()).unwrap();
        let ids: Vec<&str> = catalog.trending().map(|r| r.id.as_str()).collect();
        // braise and fuego-lento tie at 2018 with paper-planes; catalog order breaks it.
        assert_eq!(ids, ["braise", "fuego-lento", "paper-planes"]);
    }
}
