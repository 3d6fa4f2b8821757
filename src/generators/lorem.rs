// src/generators/lorem.rs
use rand::{Rng, RngCore};
use rand_core::OsRng;
use thiserror::Error;

const WORDS: &[&str] = &[
    "lorem", "ipsum", "dolor", "sit", "amet", "consectetur", "adipiscing", "elit", "sed", "do",
    "eiusmod", "tempor", "incididunt", "ut", "labore", "et", "dolore", "magna", "aliqua", "enim",
    "ad", "minim", "veniam", "quis", "nostrud", "exercitation", "ullamco", "laboris", "nisi", "aliquip",
    "ex", "ea", "commodo", "consequat", "duis", "aute", "irure", "in", "reprehenderit", "voluptate",
    "velit", "esse", "cillum", "fugiat", "nulla", "pariatur", "excepteur", "sint", "occaecat", "cupidatat",
    "non", "proident", "sunt", "culpa", "qui", "officia", "deserunt", "mollit", "anim", "id",
    "est", "laborum", "at", "vero", "eos", "accusamus", "accusantium", "doloremque", "laudantium", "totam",
    "rem", "aperiam", "eaque", "ipsa", "quae", "ab", "illo", "inventore", "veritatis", "quasi",
    "architecto", "beatae", "vitae", "dicta", "explicabo", "nemo", "ipsam", "voluptatem", "quia", "voluptas",
    "aspernatur", "aut", "odit", "fugit", "consequuntur", "magni", "dolores", "ratione", "sequi", "nesciunt",
    "neque", "porro", "quisquam", "dolorem", "adipisci", "numquam", "eius", "modi", "tempora", "incidunt",
    "magnam", "aliquam", "quaerat", "minima", "nostrum", "exercitationem", "ullam", "corporis", "suscipit", "laboriosam",
    "aliquid", "commodi", "consequatur", "autem", "vel", "eum", "iure", "quam", "nihil", "molestiae",
    "illum", "quo", "iusto", "odio", "dignissimos", "ducimus", "blanditiis", "praesentium", "voluptatum", "deleniti",
    "atque", "corrupti", "quos",
];

const OPENING_SENTENCE: &str = "Lorem ipsum dolor sit amet, consectetur adipiscing elit.";
const OPENING_PARAGRAPH: &str = "Lorem ipsum dolor sit amet, consectetur adipiscing elit, sed do eiusmod tempor incididunt ut labore et dolore magna aliqua.";

pub const MAX_WORDS: usize = 1000;
pub const MAX_BLOCKS: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoremMode {
    Words(usize),
    Sentences(usize),
    Paragraphs(usize),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LoremError {
    #[error("Count must be between 1 and {max} (got {count})")]
    InvalidCount { count: usize, max: usize },
}

pub struct LoremGenerator<R: RngCore = OsRng> {
    rng: R,
}

impl LoremGenerator<OsRng> {
    pub fn new() -> Self {
        LoremGenerator { rng: OsRng }
    }
}

impl<R: RngCore> LoremGenerator<R> {
    pub fn with_rng(rng: R) -> Self {
        LoremGenerator { rng }
    }

    pub fn generate(&mut self, mode: LoremMode, start_with_lorem: bool) -> Result<String, LoremError> {
        let (count, max) = match mode {
            LoremMode::Words(n) => (n, MAX_WORDS),
            LoremMode::Sentences(n) | LoremMode::Paragraphs(n) => (n, MAX_BLOCKS),
        };
        if count == 0 || count > max {
            return Err(LoremError::InvalidCount { count, max });
        }

        let text = match mode {
            LoremMode::Words(n) => {
                let words: Vec<&str> = (0..n)
                    .map(|i| match i {
                        0 if start_with_lorem => "Lorem",
                        1 if start_with_lorem => "ipsum",
                        _ => self.word(),
                    })
                    .collect();
                format!("{}.", capitalize(&words.join(" ")))
            }
            LoremMode::Sentences(n) => {
                let sentences: Vec<String> = (0..n)
                    .map(|i| {
                        if i == 0 && start_with_lorem {
                            OPENING_SENTENCE.to_string()
                        } else {
                            let words = self.rng.gen_range(5..=12);
                            self.sentence(words)
                        }
                    })
                    .collect();
                sentences.join(" ")
            }
            LoremMode::Paragraphs(n) => {
                let paragraphs: Vec<String> = (0..n)
                    .map(|i| {
                        let sentences = self.rng.gen_range(4..=6);
                        let paragraph = self.paragraph(sentences);
                        if i == 0 && start_with_lorem {
                            format!("{} {}", OPENING_PARAGRAPH, paragraph)
                        } else {
                            paragraph
                        }
                    })
                    .collect();
                paragraphs.join("\n\n")
            }
        };

        log::debug!("Generated lorem text ({:?}, {} chars)", mode, text.len());
        Ok(text)
    }

    fn word(&mut self) -> &'static str {
        WORDS[self.rng.gen_range(0..WORDS.len())]
    }

    fn sentence(&mut self, words: usize) -> String {
        let words: Vec<&str> = (0..words).map(|_| self.word()).collect();
        format!("{}.", capitalize(&words.join(" ")))
    }

    fn paragraph(&mut self, sentences: usize) -> String {
        let sentences: Vec<String> = (0..sentences)
            .map(|_| {
                let words = self.rng.gen_range(5..=12);
                self.sentence(words)
            })
            .collect();
        sentences.join(" ")
    }
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
