use async_trait::async_trait;

use crate::modules::portfolio::application::domain::entities::PortfolioSnapshot;
use crate::modules::portfolio::application::domain::view::PortfolioView;
use crate::shared::i18n::Lang;

/// Never fails: sections that cannot be read come back empty.
#[async_trait]
pub trait ComposePortfolioUseCase: Send + Sync {
    async fn snapshot(&self) -> PortfolioSnapshot;

    async fn compose(&self, lang: Lang) -> PortfolioView {
        PortfolioView::localize(self.snapshot().await, lang)
    }
}
