//! NLP primitives: the model trait, the default rule-based model, and the
//! stop-word/lemma helpers they share.

mod lemma;
mod mock;
mod model;
mod stopwords;

pub use lemma::lemmatize;
pub use mock::MockModel;
pub use model::{NlpModel, RuleModel};
pub use stopwords::is_stop_word;
