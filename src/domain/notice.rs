use serde::{Deserialize, Serialize};
use std::fmt;

/// User-visible failure signals raised by the cart store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NoticeKind {
    OutOfStock,
    AddFailed,
    RemoveFailed,
    UpdateFailed,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum Locale {
    #[default]
    #[serde(rename = "en")]
    #[cfg_attr(feature = "cli", value(name = "en"))]
    En,
    #[serde(rename = "pt-BR", alias = "pt-br")]
    #[cfg_attr(feature = "cli", value(name = "pt-br"))]
    PtBr,
}

impl NoticeKind {
    pub fn message(self, locale: Locale) -> &'static str {
        match (self, locale) {
            (NoticeKind::OutOfStock, Locale::En) => "Requested quantity out of stock",
            (NoticeKind::AddFailed, Locale::En) => "Failed to add product",
            (NoticeKind::RemoveFailed, Locale::En) => "Failed to remove product",
            (NoticeKind::UpdateFailed, Locale::En) => "Failed to update product quantity",
            (NoticeKind::OutOfStock, Locale::PtBr) => "Quantidade solicitada fora de estoque",
            (NoticeKind::AddFailed, Locale::PtBr) => "Erro na adição do produto",
            (NoticeKind::RemoveFailed, Locale::PtBr) => "Erro na remoção do produto",
            (NoticeKind::UpdateFailed, Locale::PtBr) => {
                "Erro na alteração de quantidade do produto"
            }
        }
    }
}

impl fmt::Display for NoticeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message(Locale::En))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_are_localized() {
        assert_eq!(
            NoticeKind::OutOfStock.message(Locale::PtBr),
            "Quantidade solicitada fora de estoque"
        );
        assert_eq!(
            NoticeKind::UpdateFailed.message(Locale::En),
            "Failed to update product quantity"
        );
        assert_eq!(NoticeKind::RemoveFailed.to_string(), "Failed to remove product");
    }

    #[test]
    fn test_locale_accepts_both_spellings() {
        let strict: Locale = serde_json::from_str(r#""pt-BR""#).unwrap();
        let lower: Locale = serde_json::from_str(r#""pt-br""#).unwrap();
        assert_eq!(strict, Locale::PtBr);
        assert_eq!(lower, Locale::PtBr);
        assert_eq!(Locale::default(), Locale::En);
    }
}
