use maud::{DOCTYPE, Markup, html};

use crate::{catalog::SearchResult, entities::movie};

const TAILWIND_CDN: &str = "https://cdn.tailwindcss.com";

pub fn index_page(movies: &[movie::Model]) -> String {
    page(
        "My Movies",
        html! {
            div class="min-h-screen bg-gray-50" {
                div class="max-w-4xl mx-auto px-6 py-12" {
                    div class="flex items-start justify-between gap-6" {
                        div {
                            h1 class="text-3xl font-bold text-gray-900" { "My Movies" }
                            p class="mt-2 text-gray-600" { "Rated and reviewed, lowest rating first." }
                        }
                        a class="rounded-md bg-blue-600 px-4 py-2 font-semibold text-white hover:bg-blue-700" href="/specify" { "Add Movie" }
                    }

                    @if movies.is_empty() {
                        div class="mt-10 bg-white shadow rounded-lg p-8" {
                            p class="text-gray-600" { "Nothing here yet. Add your first movie." }
                        }
                    } @else {
                        div class="mt-10 space-y-4" {
                            @for movie in movies {
                                (movie_card(movie))
                            }
                        }
                    }
                }
            }
        },
    )
}

pub fn edit_page(movie: &movie::Model) -> String {
    page(
        "Edit",
        html! {
            div class="min-h-screen bg-gray-50 flex items-center justify-center" {
                div class="max-w-xl w-full px-6" {
                    div class="bg-white shadow rounded-lg p-8" {
                        h1 class="text-2xl font-bold text-gray-900" { "Rate " (movie.title) }
                        p class="mt-2 text-sm text-gray-500" { "Leave a field blank to keep its current value." }

                        form class="mt-6 space-y-6" method="post" action=(format!("/update/{}", movie.id)) {
                            div {
                                label class="block text-sm font-medium text-gray-700" for="new_rating" { "Your rating out of 10 e.g. 7.5" }
                                input class="mt-2 w-full rounded-md border border-gray-300 px-3 py-2 focus:border-blue-500 focus:outline-none focus:ring-1 focus:ring-blue-500" name="new_rating" id="new_rating" inputmode="decimal";
                            }
                            div {
                                label class="block text-sm font-medium text-gray-700" for="new_review" { "Your review" }
                                input class="mt-2 w-full rounded-md border border-gray-300 px-3 py-2 focus:border-blue-500 focus:outline-none focus:ring-1 focus:ring-blue-500" name="new_review" id="new_review";
                            }
                            button class="w-full rounded-md bg-blue-600 px-4 py-2 font-semibold text-white hover:bg-blue-700" type="submit" { "Done" }
                        }
                    }
                }
            }
        },
    )
}

pub fn specify_page() -> String {
    page(
        "Add Movie",
        html! {
            div class="min-h-screen bg-gray-50 flex items-center justify-center" {
                div class="max-w-xl w-full px-6" {
                    div class="bg-white shadow rounded-lg p-8" {
                        h1 class="text-2xl font-bold text-gray-900" { "Add Movie" }
                        p class="mt-2 text-gray-600" { "Search the catalog by title." }

                        form class="mt-6 space-y-6" method="post" action="/select" {
                            div {
                                label class="block text-sm font-medium text-gray-700" for="new_movie" { "Movie title" }
                                input class="mt-2 w-full rounded-md border border-gray-300 px-3 py-2 focus:border-blue-500 focus:outline-none focus:ring-1 focus:ring-blue-500" name="new_movie" id="new_movie" required;
                            }
                            button class="w-full rounded-md bg-blue-600 px-4 py-2 font-semibold text-white hover:bg-blue-700" type="submit" { "Add Movie" }
                        }
                    }
                }
            }
        },
    )
}

pub fn select_page(query: &str, results: &[SearchResult]) -> String {
    page(
        "Select Movie",
        html! {
            div class="min-h-screen bg-gray-50" {
                div class="max-w-2xl mx-auto px-6 py-12" {
                    h1 class="text-2xl font-bold text-gray-900" { "Results for " "\u{201c}" (query) "\u{201d}" }

                    @if results.is_empty() {
                        div class="mt-8 bg-white shadow rounded-lg p-8" {
                            p class="text-gray-600" { "No matches. " a class="text-blue-600 hover:text-blue-800" href="/specify" { "Try another title." } }
                        }
                    } @else {
                        ul class="mt-8 space-y-3" {
                            @for result in results {
                                li class="bg-white shadow rounded-lg p-5" {
                                    a class="text-lg font-semibold text-blue-600 hover:text-blue-800" href=(format!("/add/{}", result.id)) {
                                        (result.title)
                                        @if let Some(year) = result.release_date.as_deref().and_then(|d| d.get(..4)) {
                                            span class="ml-2 font-normal text-gray-500" { "(" (year) ")" }
                                        }
                                    }
                                    @if !result.overview.is_empty() {
                                        p class="mt-2 text-sm text-gray-600 line-clamp-2" { (result.overview) }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        },
    )
}

pub fn error_page(message: String) -> String {
    page(
        "Error",
        html! {
            div class="min-h-screen bg-gray-50 flex items-center justify-center" {
                div class="max-w-xl w-full px-6" {
                    div class="bg-white shadow rounded-lg p-8" {
                        h1 class="text-2xl font-bold text-gray-900" { "Error" }
                        p class="mt-4 text-gray-700" { (message) }
                        a class="mt-6 inline-block text-blue-600 hover:text-blue-800" href="/" { "Back" }
                    }
                }
            }
        },
    )
}

fn page(title: &str, body: Markup) -> String {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) }
                script src=(TAILWIND_CDN) {}
            }
            body { (body) }
        }
    }
    .into_string()
}

fn movie_card(movie: &movie::Model) -> Markup {
    html! {
        div class="bg-white shadow rounded-lg p-6" {
            div class="flex gap-6" {
                img class="h-36 w-24 flex-none rounded object-cover bg-gray-200" src=(movie.img_url) alt=(movie.title);
                div class="min-w-0 flex-1" {
                    div class="flex items-start justify-between gap-4" {
                        h2 class="text-xl font-semibold text-gray-900" {
                            (movie.title)
                            span class="ml-2 font-normal text-gray-500" { "(" (movie.year) ")" }
                        }
                        span class="flex-none rounded-full bg-blue-100 px-3 py-1 text-sm font-semibold text-blue-800" {
                            (movie.rating) "/10"
                        }
                    }
                    p class="mt-2 text-sm text-gray-600 line-clamp-3" { (movie.description) }
                    @if !movie.review.is_empty() {
                        p class="mt-3 text-sm italic text-gray-700" { "\u{201c}" (movie.review) "\u{201d}" }
                    }
                    div class="mt-4 flex gap-4 text-sm" {
                        a class="text-blue-600 hover:text-blue-800" href=(format!("/update/{}", movie.id)) { "Edit" }
                        a class="text-red-600 hover:text-red-800" href=(format!("/delete/{}", movie.id)) { "Delete" }
                    }
                }
            }
        }
    }
}
