use crate::models::{ChatMessage, ChatRole, ChatType, Summary, TranscriptItem};
use crate::transcript::error::ApiError;
use crate::transcript::summary::SummaryView;
use crate::utils::{format_channel_url, format_timestamp, format_watch_url};
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct UrlFormProps {
    pub video_url: String,
    pub loading: bool,
    pub can_submit: bool,
    pub on_input: Callback<String>,
    pub on_submit: Callback<()>,
}

#[function_component(UrlForm)]
pub fn url_form(props: &UrlFormProps) -> Html {
    let on_input = {
        let on_input = props.on_input.clone();
        Callback::from(move |e: InputEvent| {
            let input_value = e.target_unchecked_into::<HtmlInputElement>().value();
            on_input.emit(input_value);
        })
    };

    let on_submit = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: web_sys::SubmitEvent| {
            e.prevent_default();
            on_submit.emit(());
        })
    };

    html! {
        <div class="bg-white shadow rounded-lg p-6 mb-8">
            <form onsubmit={on_submit} class="space-y-4">
                <label class="block text-sm font-medium text-gray-700 mb-1">
                    {"YouTube URL or video ID"}
                </label>
                <div class="flex">
                    <input
                        type="text"
                        id="videoUrl"
                        class="flex-1 rounded-l-md border border-gray-300 shadow-sm p-2 text-black focus:outline-none focus:ring-2 focus:ring-blue-500"
                        placeholder="https://www.youtube.com/watch?v=xxxx or xxxx"
                        value={props.video_url.clone()}
                        oninput={on_input}
                        required={true}
                    />
                    <button
                        type="submit"
                        disabled={!props.can_submit}
                        class="bg-blue-600 hover:bg-blue-700 text-white font-bold py-2 px-4 rounded-r-md disabled:opacity-50"
                    >
                        { if props.loading { "Fetching..." } else { "Get transcript" } }
                    </button>
                </div>
                <p class="mt-1 text-xs text-gray-500">
                    {"Enter a URL or video ID to fetch its transcript"}
                </p>
            </form>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ErrorBannerProps {
    pub error: Option<ApiError>,
}

#[function_component(ErrorBanner)]
pub fn error_banner(props: &ErrorBannerProps) -> Html {
    if let Some(error) = &props.error {
        html! {
            <div class="bg-red-50 border-l-4 border-red-500 p-4 mb-8 rounded shadow">
                <p class="text-xs font-semibold uppercase text-red-500">{ error.kind().display_name() }</p>
                <p class="text-sm text-red-700">{ error.to_string() }</p>
            </div>
        }
    } else {
        html! {}
    }
}

#[derive(Properties, PartialEq)]
pub struct VideoInfoPanelProps {
    pub title: String,
    pub description: String,
    pub channel_title: String,
    pub channel_id: String,
    pub description_expanded: bool,
    pub on_toggle_description: Callback<()>,
}

#[function_component(VideoInfoPanel)]
pub fn video_info_panel(props: &VideoInfoPanelProps) -> Html {
    if props.title.is_empty() {
        return html! {};
    }

    let on_toggle = props.on_toggle_description.reform(|_: MouseEvent| ());

    html! {
        <div class="bg-white shadow rounded-lg overflow-hidden mb-8">
            <div class="p-4 bg-gray-50 border-b border-gray-200">
                <h2 class="text-lg font-medium text-gray-900">{"Video title"}</h2>
            </div>
            <div class="p-4 text-black">
                <p>{ &props.title }</p>
                {
                    if !props.channel_title.is_empty() {
                        html! {
                            <a href={format_channel_url(&props.channel_id)}
                               target="_blank"
                               rel="noopener noreferrer"
                               class="text-sm text-blue-600 hover:text-blue-800 mt-2 inline-block">
                                { &props.channel_title }
                            </a>
                        }
                    } else {
                        html! {}
                    }
                }
            </div>
            <div class="p-4 border-t border-gray-200">
                <button onclick={on_toggle} class="text-blue-600 hover:text-blue-800 mb-2 flex items-center">
                    <span class="mr-2">{"Description"}</span>
                    <span>{ if props.description_expanded { "▲" } else { "▼" } }</span>
                </button>
                {
                    if props.description_expanded {
                        html! {
                            <p class="mt-2 text-gray-600 whitespace-pre-wrap">{ &props.description }</p>
                        }
                    } else {
                        html! {}
                    }
                }
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct SummaryPanelProps {
    pub view: SummaryView,
}

#[function_component(SummaryPanel)]
pub fn summary_panel(props: &SummaryPanelProps) -> Html {
    let body = match (&props.view, props.view.fallback_message()) {
        (SummaryView::Parsed { summary, .. }, _) => render_summary(summary),
        (SummaryView::Invalid { .. }, message) => html! {
            <p class="text-red-500">{ message.unwrap_or_default() }</p>
        },
    };

    html! {
        <div class="space-y-4">
            <div class="bg-white shadow overflow-hidden sm:rounded-lg p-4 my-4">
                <h2 class="text-lg font-medium text-gray-900">{"Summary"}</h2>
                <div class="mt-4 space-y-4">{ body }</div>
            </div>
            {
                if let Some(pretty) = props.view.raw_json() {
                    html! {
                        <div class="bg-white shadow overflow-hidden sm:rounded-lg p-4">
                            <h2 class="text-lg font-medium text-gray-900 mb-4">{"Raw summary (JSON)"}</h2>
                            <pre class="bg-gray-50 p-4 rounded-lg overflow-x-auto text-sm font-mono text-gray-700">
                                { pretty }
                            </pre>
                        </div>
                    }
                } else {
                    html! {}
                }
            }
        </div>
    }
}

fn render_summary(summary: &Summary) -> Html {
    html! {
        <>
            <div>
                <h3 class="text-md font-medium">{"Subtitle"}</h3>
                <p class="text-gray-600">{ &summary.sub_title }</p>
            </div>
            <div>
                <h3 class="text-md font-medium">{"Overview"}</h3>
                <p class="text-gray-600 whitespace-pre-wrap">{ &summary.overview }</p>
            </div>
            <div>
                <h3 class="text-md font-medium">{"Main topics"}</h3>
                <ul class="list-disc list-inside text-gray-600">
                    { for summary.main_topics.iter().map(|topic| html! { <li>{ topic }</li> }) }
                </ul>
            </div>
            <div>
                <h3 class="text-md font-medium">{"Key points"}</h3>
                <div class="space-y-2">
                    { for summary.key_points.iter().map(|point| html! {
                        <div>
                            <p class="font-medium text-gray-700">{ &point.title }</p>
                            <p class="text-gray-600">{ &point.description }</p>
                        </div>
                    })}
                </div>
            </div>
            <div>
                <h3 class="text-md font-medium">{"Keywords"}</h3>
                <p class="text-gray-600">{ summary.keywords.join(", ") }</p>
            </div>
            <div>
                <h3 class="text-md font-medium">{"Action items"}</h3>
                <ul class="list-disc list-inside text-gray-600">
                    { for summary.action_items.iter().map(|item| html! { <li>{ item }</li> }) }
                </ul>
            </div>
        </>
    }
}

#[derive(Properties, PartialEq)]
pub struct TranscriptRowProps {
    pub item: TranscriptItem,
    pub video_id: String,
}

#[function_component(TranscriptRow)]
pub fn transcript_row(props: &TranscriptRowProps) -> Html {
    html! {
        <div class="p-3 border-b border-gray-200 hover:bg-gray-50">
            <div class="flex items-start">
                <a href={format_watch_url(&props.video_id, props.item.start)}
                   target="_blank"
                   rel="noopener noreferrer"
                   class="text-xs font-mono text-gray-500 hover:text-blue-600 w-12">
                    { format_timestamp(props.item.start) }
                </a>
                <p class="flex-1 text-sm text-black">{ &props.item.text }</p>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct TranscriptPanelProps {
    pub items: Vec<TranscriptItem>,
    pub video_id: String,
    pub expanded: bool,
    pub summarizing: bool,
    pub can_summarize: bool,
    pub on_toggle: Callback<()>,
    pub on_summarize: Callback<()>,
}

#[function_component(TranscriptPanel)]
pub fn transcript_panel(props: &TranscriptPanelProps) -> Html {
    let on_toggle = props.on_toggle.reform(|_: MouseEvent| ());
    let on_summarize = props.on_summarize.reform(|_: MouseEvent| ());

    html! {
        <div class="bg-white shadow rounded-lg overflow-hidden">
            <div class="p-4 bg-gray-50 border-b border-gray-200 flex justify-between items-center">
                <div class="flex items-center space-x-2">
                    <button onclick={on_toggle} class="text-gray-500 hover:text-gray-700">
                        { if props.expanded { "▼" } else { "▶" } }
                    </button>
                    <h2 class="text-lg font-medium text-gray-900">{"Transcript"}</h2>
                </div>
                <button
                    onclick={on_summarize}
                    disabled={!props.can_summarize}
                    class="bg-green-600 hover:bg-green-700 text-white font-bold py-2 px-4 rounded disabled:opacity-50"
                >
                    { if props.summarizing { "Summarizing..." } else { "Summarize" } }
                </button>
            </div>
            {
                if props.expanded {
                    html! {
                        <div class="divide-y divide-gray-200 max-h-[60vh] overflow-y-auto">
                            { for props.items.iter().map(|item| html! {
                                <TranscriptRow item={item.clone()} video_id={props.video_id.clone()} />
                            })}
                        </div>
                    }
                } else {
                    html! {}
                }
            }
        </div>
    }
}

#[function_component(LoadingSpinner)]
pub fn loading_spinner() -> Html {
    html! {
        <div class="flex justify-center my-8">
            <div class="animate-spin rounded-full h-12 w-12 border-t-2 border-b-2 border-blue-500"></div>
        </div>
    }
}

#[function_component(EmptyState)]
pub fn empty_state() -> Html {
    html! {
        <div class="bg-white shadow rounded-lg p-8 text-center">
            <h3 class="mt-2 text-sm font-medium text-gray-900">{"Get a transcript"}</h3>
            <p class="mt-1 text-sm text-gray-500">
                {"Enter a YouTube URL or video ID to fetch its transcript"}
            </p>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ChatSidebarProps {
    pub chat_type: ChatType,
    pub messages: Vec<ChatMessage>,
    pub input: String,
    pub loading: bool,
    pub has_context: bool,
    pub can_send: bool,
    pub on_chat_type_change: Callback<ChatType>,
    pub on_input: Callback<String>,
    pub on_send: Callback<()>,
}

#[function_component(ChatSidebar)]
pub fn chat_sidebar(props: &ChatSidebarProps) -> Html {
    let context_button = |chat_type: ChatType| {
        let on_click = props.on_chat_type_change.reform(move |_: MouseEvent| chat_type);
        let button_class = if props.chat_type == chat_type {
            "px-3 py-1 rounded-md text-sm bg-blue-600 text-white"
        } else {
            "px-3 py-1 rounded-md text-sm bg-gray-200 text-gray-700"
        };
        html! {
            <button onclick={on_click} class={button_class}>
                { chat_type.display_name() }
            </button>
        }
    };

    let on_input = {
        let on_input = props.on_input.clone();
        Callback::from(move |e: InputEvent| {
            let input_value = e.target_unchecked_into::<HtmlInputElement>().value();
            on_input.emit(input_value);
        })
    };

    let on_keypress = {
        let on_send = props.on_send.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" {
                on_send.emit(());
            }
        })
    };

    let on_send = props.on_send.reform(|_: MouseEvent| ());
    let context_label = props.chat_type.display_name();

    html! {
        <div class="w-96 bg-white shadow rounded-lg overflow-hidden flex flex-col h-[calc(100vh-12rem)]">
            <div class="p-4 bg-gray-50 border-b border-gray-200">
                <div class="flex items-center justify-between">
                    <h2 class="text-lg font-medium text-gray-900">{"Chat"}</h2>
                    <div class="flex items-center space-x-2">
                        { context_button(ChatType::Transcript) }
                        { context_button(ChatType::Summary) }
                    </div>
                </div>
            </div>

            <div class="flex-1 overflow-y-auto p-4 space-y-4">
                { for props.messages.iter().map(|message| render_message(message, context_label)) }
                {
                    if props.loading {
                        html! {
                            <div class="flex justify-start">
                                <div class="bg-gray-100 rounded-lg p-3 flex items-center space-x-2">
                                    <div class="w-2 h-2 bg-gray-400 rounded-full animate-bounce" style="animation-delay: 0ms"></div>
                                    <div class="w-2 h-2 bg-gray-400 rounded-full animate-bounce" style="animation-delay: 150ms"></div>
                                    <div class="w-2 h-2 bg-gray-400 rounded-full animate-bounce" style="animation-delay: 300ms"></div>
                                </div>
                            </div>
                        }
                    } else {
                        html! {}
                    }
                }
            </div>

            <div class="p-4 border-t border-gray-200">
                <div class="flex space-x-2">
                    <input
                        type="text"
                        value={props.input.clone()}
                        oninput={on_input}
                        onkeypress={on_keypress}
                        disabled={props.loading || !props.has_context}
                        placeholder={ if props.has_context { "Type a message..." } else { "Fetch a transcript or summary first" } }
                        class="flex-1 rounded-md border border-gray-300 shadow-sm p-2 text-black disabled:opacity-50"
                    />
                    <button
                        onclick={on_send}
                        disabled={!props.can_send || !props.has_context}
                        class="bg-blue-600 hover:bg-blue-700 text-white font-bold py-2 px-4 rounded-md disabled:opacity-50"
                    >
                        {"Send"}
                    </button>
                </div>
            </div>
        </div>
    }
}

fn render_message(message: &ChatMessage, context_label: &'static str) -> Html {
    match message.role {
        ChatRole::User => html! {
            <div class="flex justify-end">
                <div class="max-w-[80%] rounded-lg p-3 relative bg-blue-600 text-white">
                    { &message.content }
                    <span class="absolute -top-2 right-2 text-xs text-gray-500 bg-white px-1 rounded">
                        { context_label }
                    </span>
                </div>
            </div>
        },
        ChatRole::Ai => html! {
            <div class="flex justify-start">
                <div class="max-w-[80%] rounded-lg p-3 relative bg-gray-100 text-gray-900">
                    { &message.content }
                </div>
            </div>
        },
    }
}
