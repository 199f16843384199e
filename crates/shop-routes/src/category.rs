use std::fmt;
use std::str::FromStr;

use crate::error::RouteError;

/// A product taxonomy segment. Each category owns a list page at `/{slug}`
/// and a detail page at `/{slug}/:id`; both render the same two components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    MobilesAndTablets,
    Televisions,
    Kitchen,
    Headphones,
    HomeAppliances,
    Computers,
    Cameras,
    PersonalCare,
    Accessories,
}

impl Category {
    /// Declaration order of the storefront routes.
    pub const ALL: [Category; 9] = [
        Category::MobilesAndTablets,
        Category::Televisions,
        Category::Kitchen,
        Category::Headphones,
        Category::HomeAppliances,
        Category::Computers,
        Category::Cameras,
        Category::PersonalCare,
        Category::Accessories,
    ];

    /// The URL segment, also used as the category filter passed to pages.
    pub const fn slug(self) -> &'static str {
        match self {
            Self::MobilesAndTablets => "mobilesandtablets",
            Self::Televisions => "televisions",
            Self::Kitchen => "kitchen",
            Self::Headphones => "headphones",
            Self::HomeAppliances => "homeappliances",
            Self::Computers => "computers",
            Self::Cameras => "cameras",
            Self::PersonalCare => "personalcare",
            Self::Accessories => "accessories",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::MobilesAndTablets => "Mobiles & Tablets",
            Self::Televisions => "Televisions",
            Self::Kitchen => "Kitchen",
            Self::Headphones => "Headphones",
            Self::HomeAppliances => "Home Appliances",
            Self::Computers => "Computers",
            Self::Cameras => "Cameras",
            Self::PersonalCare => "Personal Care",
            Self::Accessories => "Accessories",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for Category {
    type Err = RouteError;

    fn from_str(slug: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.slug() == slug)
            .ok_or_else(|| RouteError::UnknownCategory(slug.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugs_are_distinct() {
        let mut slugs: Vec<_> = Category::ALL.iter().map(|c| c.slug()).collect();
        slugs.sort_unstable();
        slugs.dedup();
        assert_eq!(slugs.len(), Category::ALL.len());
    }

    #[test]
    fn test_from_str_known_slug() {
        assert_eq!("personalcare".parse::<Category>(), Ok(Category::PersonalCare));
    }

    #[test]
    fn test_from_str_is_case_sensitive() {
        assert_eq!(
            "Cameras".parse::<Category>(),
            Err(RouteError::UnknownCategory("Cameras".to_string()))
        );
    }

    #[test]
    fn test_wishlist_is_not_a_category() {
        assert!("whishlist".parse::<Category>().is_err());
    }
}
