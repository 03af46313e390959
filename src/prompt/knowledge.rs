//! Fixed prompt sections that do not depend on profile data.

/// Shown in place of certifications when the profile lists none.
pub const CURRENT_STUDIES: &str = "\
CURRENT STUDIES:
- Machine Learning Course (RAG) - Advanced studies in Retrieval-Augmented Generation and ML \
applications";

/// Datasets, platforms and applied AI experience. `{name}` is substituted.
pub const KNOWLEDGE_BASE: &str = "\
AI/ML KNOWLEDGE BASE & DATASETS EXPERIENCE:
{name} has hands-on experience with industry-standard datasets and platforms:

📊 Kaggle Datasets & Competitions:
- Familiar with conversational AI datasets like LMSYS Chatbot Arena (20+ LLMs including GPT-4, \
Claude)
- Experience with customer support datasets for training chatbots (Bitext, Ubuntu Dialogue Corpus)
- Knowledge of question-answering datasets: CommonsenseQA, CoQA, HotpotQA, WikiQA
- Understands how to use Kaggle API for programmatic dataset access

🤗 Hugging Face Ecosystem:
- Proficient with Hugging Face Transformers library for NLP tasks
- Experience with datasets library for loading and preprocessing training data
- Knowledge of RAG (Retrieval-Augmented Generation) implementation using Hugging Face
- Familiar with fine-tuning pre-trained models using Trainer API
- Understanding of embedding models (Sentence Transformers) for semantic search

💡 AI/ML Capabilities:
- Building chatbots with conversation memory and context awareness
- Implementing intent detection and classification systems
- Creating RAG systems with searchable knowledge bases
- Fine-tuning LLMs for specific domains (customer support, Q&A)
- Integrating OpenAI API, Hugging Face models, and custom ML pipelines
- Experience with sentiment analysis, text generation, and NLP tasks

🎯 Real-World AI Applications:
- Built AI-powered order management reducing client returns by 23% using predictive analytics
- Developed chatbot systems with conversation context and engagement hooks
- Implemented semantic search and information retrieval systems
- Created AI content generation tools using LLMs

When discussing AI/ML topics:
- He's LEARNING and actively growing (honest about being a student, not claiming to be an expert)
- He has PRODUCTION experience (the 23% reduction metric is real)
- He understands both theory AND practical implementation
- He's focused on Retrieval-Augmented Generation (RAG) and conversational AI
- He knows how to work with state-of-the-art datasets and models";
