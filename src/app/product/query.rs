//! 列表查询：过滤、搜索、分页

use super::model::{Product, ProductQuery};

pub const DEFAULT_PAGE: usize = 1;
pub const DEFAULT_LIMIT: usize = 10;

#[derive(Debug, Clone, PartialEq)]
pub struct ProductPage {
    pub total: usize,
    pub page: usize,
    pub limit: usize,
    pub products: Vec<Product>,
}

/// 缺失、非数字或小于 1 的值回退到默认值
fn positive_or(raw: Option<&str>, default: usize) -> usize {
    raw.and_then(|s| s.trim().parse::<usize>().ok())
        .filter(|n| *n > 0)
        .unwrap_or(default)
}

/// 空字符串等同于未提供该过滤条件
fn non_empty(raw: Option<&str>) -> Option<&str> {
    raw.filter(|s| !s.is_empty())
}

fn matches(product: &Product, category: Option<&str>, search: Option<&str>) -> bool {
    let category_ok = category.map_or(true, |c| product.category.to_lowercase() == c);
    let search_ok = search.map_or(true, |s| product.name.to_lowercase().contains(s));
    category_ok && search_ok
}

/// 纯函数：按插入顺序过滤后截取分页窗口
pub fn run(products: &[Product], query: &ProductQuery) -> ProductPage {
    let category = non_empty(query.category.as_deref()).map(str::to_lowercase);
    let search = non_empty(query.search.as_deref()).map(str::to_lowercase);
    let page = positive_or(query.page.as_deref(), DEFAULT_PAGE);
    let limit = positive_or(query.limit.as_deref(), DEFAULT_LIMIT);

    let matched: Vec<&Product> = products
        .iter()
        .filter(|p| matches(p, category.as_deref(), search.as_deref()))
        .collect();

    let offset = (page - 1).saturating_mul(limit);
    let window = matched
        .iter()
        .skip(offset)
        .take(limit)
        .map(|p| (*p).clone())
        .collect();

    ProductPage {
        total: matched.len(),
        page,
        limit,
        products: window,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(pairs: &[(&str, &str)]) -> ProductQuery {
        ProductQuery::from_pairs(pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())))
    }

    fn names(page: &ProductPage) -> Vec<&str> {
        page.products.iter().map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn no_filters_returns_everything_with_defaults() {
        let page = run(&Product::samples(), &ProductQuery::default());
        assert_eq!(page.total, 3);
        assert_eq!(page.page, 1);
        assert_eq!(page.limit, 10);
        assert_eq!(names(&page), ["Laptop", "Smartphone", "Coffee Maker"]);
    }

    #[test]
    fn category_filter_ignores_case() {
        let page = run(&Product::samples(), &query(&[("category", "ELECTRONICS")]));
        assert_eq!(page.total, 2);
        assert_eq!(names(&page), ["Laptop", "Smartphone"]);
    }

    #[test]
    fn category_filter_is_exact_match() {
        let page = run(&Product::samples(), &query(&[("category", "electro")]));
        assert_eq!(page.total, 0);
        assert!(page.products.is_empty());
    }

    #[test]
    fn empty_filters_are_ignored() {
        let page = run(&Product::samples(), &query(&[("category", ""), ("search", "")]));
        assert_eq!(page.total, 3);
    }

    #[test]
    fn repeated_keys_keep_first_value() {
        let page = run(
            &Product::samples(),
            &query(&[("page", "2"), ("limit", "2"), ("page", "1"), ("limit", "9")]),
        );
        assert_eq!(page.page, 2);
        assert_eq!(page.limit, 2);
        assert_eq!(names(&page), ["Coffee Maker"]);
    }

    #[test]
    fn search_matches_name_substring() {
        let page = run(&Product::samples(), &query(&[("search", "PHONE")]));
        assert_eq!(names(&page), ["Smartphone"]);
    }

    #[test]
    fn filters_compose_with_and() {
        let page = run(
            &Product::samples(),
            &query(&[("category", "kitchen"), ("search", "laptop")]),
        );
        assert_eq!(page.total, 0);

        let page = run(
            &Product::samples(),
            &query(&[("category", "electronics"), ("search", "lap")]),
        );
        assert_eq!(names(&page), ["Laptop"]);
    }

    #[test]
    fn paginates_after_filtering() {
        let page = run(&Product::samples(), &query(&[("page", "2"), ("limit", "2")]));
        assert_eq!(page.total, 3);
        assert_eq!(names(&page), ["Coffee Maker"]);
    }

    #[test]
    fn out_of_range_page_is_empty() {
        let page = run(&Product::samples(), &query(&[("page", "9"), ("limit", "2")]));
        assert_eq!(page.total, 3);
        assert_eq!(page.page, 9);
        assert!(page.products.is_empty());
    }

    #[test]
    fn invalid_paging_values_use_defaults() {
        let page = run(&Product::samples(), &query(&[("page", "0"), ("limit", "abc")]));
        assert_eq!(page.page, DEFAULT_PAGE);
        assert_eq!(page.limit, DEFAULT_LIMIT);

        let page = run(&Product::samples(), &query(&[("page", "-1")]));
        assert_eq!(page.page, DEFAULT_PAGE);
    }

    #[test]
    fn huge_page_does_not_overflow() {
        let huge = usize::MAX.to_string();
        let page = run(&Product::samples(), &query(&[("page", &huge), ("limit", &huge)]));
        assert!(page.products.is_empty());
    }
}
