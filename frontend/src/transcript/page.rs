use crate::env_variable_utils::get_app_name;
use crate::models::ChatType;
use crate::transcript::api::{fetch_transcript, send_chat, summarize_video};
use crate::transcript::components::{
    ChatSidebar, EmptyState, ErrorBanner, LoadingSpinner, SummaryPanel, TranscriptPanel, UrlForm,
    VideoInfoPanel,
};
use crate::transcript::state::{AppAction, AppState};
use yew::prelude::*;

#[function_component(TranscriptApp)]
pub fn transcript_app() -> Html {
    let state = use_reducer(AppState::default);
    let app_name = use_state(get_app_name);

    let on_url_input = {
        let state = state.clone();
        Callback::from(move |url: String| state.dispatch(AppAction::SetVideoUrl(url)))
    };

    let on_submit = {
        let state = state.clone();
        Callback::from(move |_: ()| {
            let Some(request) = state.transcript_request() else {
                return;
            };
            let generation = state.generation + 1;
            state.dispatch(AppAction::TranscriptRequested { generation });

            let state = state.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match fetch_transcript(&request).await {
                    Ok(response) => {
                        log::info!(
                            "Loaded {} transcript items for {}",
                            response.transcript.len(),
                            request.video_id
                        );
                        state.dispatch(AppAction::TranscriptLoaded {
                            generation,
                            response,
                        });
                    }
                    Err(error) => {
                        log::error!(
                            "Transcript request for {} failed: {error}",
                            request.video_id
                        );
                        state.dispatch(AppAction::TranscriptFailed { generation, error });
                    }
                }
            });
        })
    };

    let on_summarize = {
        let state = state.clone();
        Callback::from(move |_: ()| {
            let Some(request) = state.summarize_request() else {
                return;
            };
            let generation = state.generation;
            state.dispatch(AppAction::SummarizeRequested);

            let state = state.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match summarize_video(&request).await {
                    Ok(response) => state.dispatch(AppAction::SummaryLoaded {
                        generation,
                        summary: response.summary,
                    }),
                    Err(error) => {
                        log::error!("Summary request for {} failed: {error}", request.video_id);
                        state.dispatch(AppAction::SummaryFailed { generation, error });
                    }
                }
            });
        })
    };

    let on_chat_input = {
        let state = state.clone();
        Callback::from(move |text: String| state.dispatch(AppAction::SetChatInput(text)))
    };

    let on_chat_type_change = {
        let state = state.clone();
        Callback::from(move |chat_type: ChatType| {
            state.dispatch(AppAction::SetChatType(chat_type))
        })
    };

    let on_send_chat = {
        let state = state.clone();
        Callback::from(move |_: ()| {
            let Some(request) = state.chat_request() else {
                return;
            };
            let chat_type = request.chat_type;
            state.dispatch(AppAction::ChatSent {
                chat_type,
                content: request.content.clone(),
            });

            let state = state.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match send_chat(&request).await {
                    Ok(response) => state.dispatch(AppAction::ChatReplied {
                        chat_type,
                        content: response.response,
                    }),
                    Err(error) => {
                        log::error!("Chat request failed: {error}");
                        state.dispatch(AppAction::ChatFailed { error });
                    }
                }
            });
        })
    };

    let on_toggle_transcript = {
        let state = state.clone();
        Callback::from(move |_: ()| state.dispatch(AppAction::ToggleTranscript))
    };

    let on_toggle_description = {
        let state = state.clone();
        Callback::from(move |_: ()| state.dispatch(AppAction::ToggleDescription))
    };

    html! {
        <div class="min-h-screen bg-gray-50">
            <header class="bg-white shadow-sm">
                <div class="max-w-5xl mx-auto px-4 py-6">
                    <h1 class="text-2xl font-bold text-gray-900">{ &*app_name }</h1>
                </div>
            </header>

            <main class="max-w-7xl mx-auto px-4 py-8 flex">
                <div class="flex-1 mr-4">
                    <UrlForm
                        video_url={state.video_url.clone()}
                        loading={state.is_loading}
                        can_submit={state.can_submit()}
                        on_input={on_url_input}
                        on_submit={on_submit}
                    />

                    <ErrorBanner error={state.error.clone()} />

                    <VideoInfoPanel
                        title={state.title.clone()}
                        description={state.description.clone()}
                        channel_title={state.channel_title.clone()}
                        channel_id={state.channel_id.clone()}
                        description_expanded={state.is_description_expanded}
                        on_toggle_description={on_toggle_description}
                    />

                    {
                        if !state.transcript.is_empty() {
                            html! {
                                <div class="space-y-4">
                                    {
                                        if let Some(view) = state.summary_view() {
                                            html! { <SummaryPanel view={view} /> }
                                        } else {
                                            html! {}
                                        }
                                    }
                                    <TranscriptPanel
                                        items={state.transcript.clone()}
                                        video_id={state.loaded_video_id.clone()}
                                        expanded={state.is_transcript_expanded}
                                        summarizing={state.is_summarizing}
                                        can_summarize={state.can_summarize()}
                                        on_toggle={on_toggle_transcript}
                                        on_summarize={on_summarize}
                                    />
                                </div>
                            }
                        } else {
                            html! {}
                        }
                    }

                    { if state.is_loading { html! { <LoadingSpinner /> } } else { html! {} } }

                    { if state.show_empty_state() { html! { <EmptyState /> } } else { html! {} } }
                </div>

                <ChatSidebar
                    chat_type={state.chat_type}
                    messages={state.active_chat().to_vec()}
                    input={state.chat_input.clone()}
                    loading={state.is_chat_loading}
                    has_context={state.has_chat_context()}
                    can_send={state.can_send_chat()}
                    on_chat_type_change={on_chat_type_change}
                    on_input={on_chat_input}
                    on_send={on_send_chat}
                />
            </main>

            <footer class="bg-white border-t border-gray-200 mt-12">
                <div class="max-w-5xl mx-auto px-4 py-6">
                    <p class="text-center text-sm text-gray-500">{ &*app_name }</p>
                </div>
            </footer>
        </div>
    }
}
