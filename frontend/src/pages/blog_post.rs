//! Blog detail page. There is no single-item endpoint on the backend,
//! so the post is resolved out of the fetched collection.

use pulldown_cmark::{html as md_html, Parser};
use yew::platform::spawn_local;
use yew::prelude::*;

use common::model::blog::BlogPost;
use common::remote::{RecordApi, RemoteError};

use crate::api::RestClient;

#[derive(Properties, PartialEq, Clone)]
pub struct BlogPostProps {
    pub id: String,
}

pub enum Msg {
    Loaded(Result<Vec<BlogPost>, RemoteError>),
}

pub struct BlogPostPage {
    post: Option<BlogPost>,
    ready: bool,
}

impl Component for BlogPostPage {
    type Message = Msg;
    type Properties = BlogPostProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            post: None,
            ready: false,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Loaded(Ok(posts)) => {
                let id = &ctx.props().id;
                self.post = posts.into_iter().find(|post| &post.id == id);
            }
            Msg::Loaded(Err(err)) => {
                gloo_console::error!(format!("blog load failed: {err}"));
            }
        }
        self.ready = true;
        true
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        if !self.ready {
            return html! { <p class="muted">{"Loading…"}</p> };
        }
        match &self.post {
            Some(post) => html! {
                <article class="page blog-post">
                    {
                        if post.cover.is_empty() {
                            html! {}
                        } else {
                            html! { <img class="post-cover" src={post.cover.clone()} alt="" /> }
                        }
                    }
                    <h1>{ post.title.clone() }</h1>
                    <p class="card-meta">{ post.author.clone() }</p>
                    <div class="post-body">{ markdown(&post.content) }</div>
                    <a class="link" href="/blog">{"Back to all news"}</a>
                </article>
            },
            None => html! {
                <section class="page">
                    <h1>{"Post not found"}</h1>
                    <p>{"This post is no longer available."}</p>
                    <a class="link" href="/blog">{"Back to all news"}</a>
                </section>
            },
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render {
            let link = ctx.link().clone();
            spawn_local(async move {
                link.send_message(Msg::Loaded(RestClient::<BlogPost>::new().list().await));
            });
        }
    }
}

fn markdown(content: &str) -> Html {
    let parser = Parser::new(content);
    let mut out = String::new();
    md_html::push_html(&mut out, parser);
    Html::from_html_unchecked(AttrValue::from(out))
}
