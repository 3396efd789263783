//! Shared card renderers handed to `ContentList` by the public pages.

use yew::prelude::*;

use common::model::blog::BlogPost;
use common::model::product::Product;
use common::model::review::Review;

pub fn product_card(product: Product) -> Html {
    let meta = if product.origin.is_empty() {
        product.category.clone()
    } else {
        format!("{} · {}", product.category, product.origin)
    };
    html! {
        <article class="card product-card">
            {
                if product.image.is_empty() {
                    html! {}
                } else {
                    html! { <img class="card-thumb" src={product.image.clone()} alt={product.title.clone()} /> }
                }
            }
            <h3>{ product.title.clone() }</h3>
            <p class="card-meta">{ meta }</p>
            <p class="card-teaser">{ product.description.clone() }</p>
        </article>
    }
}

pub fn review_card(review: Review) -> Html {
    let by = if review.company.is_empty() {
        review.name.clone()
    } else {
        format!("{}, {}", review.name, review.company)
    };
    html! {
        <article class="card review-card">
            <p class="stars" aria-label={format!("{} out of 5", review.rating)}>
                { stars(review.rating) }
            </p>
            <blockquote>{ review.message.clone() }</blockquote>
            <p class="card-meta">{ by }</p>
        </article>
    }
}

pub fn blog_card(post: BlogPost) -> Html {
    let href = format!("/blog/{}", post.id);
    html! {
        <article class="card blog-card">
            {
                if post.cover.is_empty() {
                    html! {}
                } else {
                    html! { <img class="card-thumb" src={post.cover.clone()} alt="" /> }
                }
            }
            <h3><a href={href}>{ post.title.clone() }</a></h3>
            <p class="card-teaser">{ post.excerpt.clone() }</p>
            <p class="card-meta">{ byline(&post) }</p>
        </article>
    }
}

/// Filter handed to listings that only show moderated reviews.
pub fn approved(review: &Review) -> bool {
    review.approved
}

fn stars(rating: f64) -> String {
    let filled = rating.round().clamp(0.0, 5.0) as usize;
    format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
}

fn byline(post: &BlogPost) -> String {
    match (&post.author, &post.created_at) {
        (author, Some(date)) if !author.is_empty() => format!("{author} · {date}"),
        (author, None) if !author.is_empty() => author.clone(),
        (_, Some(date)) => date.clone(),
        _ => String::new(),
    }
}
