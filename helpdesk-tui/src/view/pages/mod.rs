pub mod article;
pub mod article_list;
