mod compose_portfolio_service;

pub use compose_portfolio_service::ComposePortfolioService;
