mod compose_portfolio;

pub use compose_portfolio::ComposePortfolioUseCase;
